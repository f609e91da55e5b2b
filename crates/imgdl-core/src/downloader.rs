//! Download orchestration: fetch (plain or watermarked), then persist.
//!
//! A failed fetch never reaches the persister. The single-image call reports
//! it as [`DownloadOutcome::Skipped`]; the batch call records it and moves on
//! to the next pair. Filesystem errors are not swallowed and abort the call.

use crate::fetch::{self, FetchError, FetchOptions};
use crate::persist;
use std::path::{Path, PathBuf};

/// Errors that stop a download call.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Batch inputs could not be paired; nothing was downloaded.
    #[error("the number of images ({urls}) and filenames ({filenames}) must be the same")]
    LengthMismatch { urls: usize, filenames: usize },
    /// Creating the directory or writing the file failed.
    #[error("storage: {0:#}")]
    Storage(anyhow::Error),
}

/// What happened to a single image.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// Bytes were fetched and written to this path.
    Saved(PathBuf),
    /// Fetch failed; nothing was written.
    Skipped(FetchError),
}

impl DownloadOutcome {
    pub fn saved_path(&self) -> Option<&Path> {
        match self {
            DownloadOutcome::Saved(p) => Some(p),
            DownloadOutcome::Skipped(_) => None,
        }
    }
}

/// One image to mirror.
#[derive(Debug, Clone, Default)]
pub struct DownloadRequest {
    pub img_url: String,
    pub filename: String,
    pub directory: Option<PathBuf>,
    pub watermark_url: Option<String>,
}

/// Summary of a batch run, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub saved: Vec<PathBuf>,
    /// URL and the reason it was not saved.
    pub skipped: Vec<(String, FetchError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.saved.len() + self.skipped.len()
    }
}

/// Fetches images and saves them locally, optionally through the watermark service.
#[derive(Debug, Clone, Default)]
pub struct ImageDownloader {
    opts: FetchOptions,
}

impl ImageDownloader {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }

    /// Fetches `img_url` (through the watermark service when `watermark_url`
    /// is set) and saves it as `filename` under `directory`.
    pub fn download_image(
        &self,
        img_url: &str,
        filename: &str,
        directory: Option<&Path>,
        watermark_url: Option<&str>,
    ) -> Result<DownloadOutcome, DownloadError> {
        let fetched = match watermark_url {
            Some(mark) => fetch::fetch_with_watermark(img_url, mark, &self.opts),
            None => fetch::fetch_image(img_url, &self.opts),
        };

        let bytes = match fetched {
            Ok(b) => b,
            Err(e) => {
                // fetch already logged the cause at warn level
                tracing::debug!("not saving {} from {}", filename, img_url);
                return Ok(DownloadOutcome::Skipped(e));
            }
        };

        let path =
            persist::save_image(&bytes, filename, directory).map_err(DownloadError::Storage)?;
        Ok(DownloadOutcome::Saved(path))
    }

    /// Runs [`ImageDownloader::download_image`] for a prepared request.
    pub fn download(&self, req: &DownloadRequest) -> Result<DownloadOutcome, DownloadError> {
        self.download_image(
            &req.img_url,
            &req.filename,
            req.directory.as_deref(),
            req.watermark_url.as_deref(),
        )
    }

    /// Downloads `img_urls[i]` as `filenames[i]`, one after another.
    ///
    /// The two slices must have the same length; this is checked before any
    /// request is made. Failed fetches are recorded in the report and the
    /// batch continues; a storage error stops it.
    pub fn download_images<U, F>(
        &self,
        img_urls: &[U],
        filenames: &[F],
        directory: Option<&Path>,
        watermark_url: Option<&str>,
    ) -> Result<BatchReport, DownloadError>
    where
        U: AsRef<str>,
        F: AsRef<str>,
    {
        if img_urls.len() != filenames.len() {
            let err = DownloadError::LengthMismatch {
                urls: img_urls.len(),
                filenames: filenames.len(),
            };
            tracing::error!("{}", err);
            return Err(err);
        }

        let mut report = BatchReport::default();
        for (url, name) in img_urls.iter().zip(filenames) {
            let url = url.as_ref();
            match self.download_image(url, name.as_ref(), directory, watermark_url)? {
                DownloadOutcome::Saved(path) => report.saved.push(path),
                DownloadOutcome::Skipped(e) => report.skipped.push((url.to_string(), e)),
            }
        }

        tracing::info!(
            "batch finished: {} saved, {} skipped",
            report.saved.len(),
            report.skipped.len()
        );
        Ok(report)
    }
}

/// [`ImageDownloader::download_image`] with default options.
pub fn download_image(
    img_url: &str,
    filename: &str,
    directory: Option<&Path>,
    watermark_url: Option<&str>,
) -> Result<DownloadOutcome, DownloadError> {
    ImageDownloader::default().download_image(img_url, filename, directory, watermark_url)
}

/// [`ImageDownloader::download_images`] with default options.
pub fn download_images<U, F>(
    img_urls: &[U],
    filenames: &[F],
    directory: Option<&Path>,
    watermark_url: Option<&str>,
) -> Result<BatchReport, DownloadError>
where
    U: AsRef<str>,
    F: AsRef<str>,
{
    ImageDownloader::default().download_images(img_urls, filenames, directory, watermark_url)
}
