pub mod config;
pub mod logging;

pub mod downloader;
pub mod fetch;
pub mod name_format;
pub mod persist;
pub mod url_model;

pub use downloader::{
    download_image, download_images, BatchReport, DownloadError, DownloadOutcome,
    DownloadRequest, ImageDownloader,
};
pub use fetch::{FetchError, FetchOptions};
pub use name_format::format_name;
