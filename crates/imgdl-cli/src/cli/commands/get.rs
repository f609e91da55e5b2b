//! `imgdl get <url>` – download a single image.

use anyhow::{Context, Result};
use imgdl_core::config::ImgdlConfig;
use imgdl_core::url_model::filename_from_url_path;
use imgdl_core::{DownloadOutcome, DownloadRequest, ImageDownloader};
use std::path::Path;

pub fn run_get(
    cfg: &ImgdlConfig,
    url: &str,
    name: Option<&str>,
    dir: Option<&Path>,
    watermark: Option<&str>,
) -> Result<()> {
    let filename = match name {
        Some(n) => n.to_string(),
        None => filename_from_url_path(url)
            .with_context(|| format!("cannot derive a file name from {url}; pass --name"))?,
    };

    let req = DownloadRequest {
        img_url: url.to_string(),
        filename,
        directory: dir.map(Path::to_path_buf),
        watermark_url: watermark.map(str::to_string),
    };

    let downloader = ImageDownloader::new(cfg.fetch_options());
    match downloader.download(&req)? {
        DownloadOutcome::Saved(path) => {
            println!("Saved {}", path.display());
            Ok(())
        }
        DownloadOutcome::Skipped(err) => {
            anyhow::bail!("could not download {url}: {err}")
        }
    }
}
