//! `imgdl batch --url .. --name ..` – download several images in order.

use anyhow::Result;
use imgdl_core::config::ImgdlConfig;
use imgdl_core::ImageDownloader;
use std::path::Path;

pub fn run_batch(
    cfg: &ImgdlConfig,
    urls: &[String],
    names: &[String],
    dir: Option<&Path>,
    watermark: Option<&str>,
) -> Result<()> {
    let downloader = ImageDownloader::new(cfg.fetch_options());
    let report = downloader.download_images(urls, names, dir, watermark)?;

    for path in &report.saved {
        println!("Saved {}", path.display());
    }
    for (url, err) in &report.skipped {
        println!("Skipped {url}: {err}");
    }
    println!(
        "{} of {} images saved",
        report.saved.len(),
        report.total()
    );
    Ok(())
}
