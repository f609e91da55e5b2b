//! Image fetching over HTTP.
//!
//! Uses the curl crate (libcurl) with blocking easy handles. Two flavors:
//! a plain GET of the image URL, and a GET to a remote watermark-compositing
//! endpoint that returns the image with the mark applied. Both succeed only
//! on HTTP 200 and report every other outcome as a [`FetchError`], after
//! logging it with the offending URL.

mod http;
mod watermark;

pub use watermark::WatermarkPayload;

use std::time::Duration;

/// Default quickchart.io watermark endpoint.
pub const DEFAULT_WATERMARK_ENDPOINT: &str = "https://quickchart.io/watermark";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Knobs for outgoing requests. `Default` matches the built-in constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Whole-request timeout (connect + transfer).
    pub timeout: Duration,
    /// URL of the watermark-compositing service.
    pub watermark_endpoint: String,
    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            watermark_endpoint: DEFAULT_WATERMARK_ENDPOINT.to_string(),
            user_agent: None,
        }
    }
}

/// Why a fetch produced no bytes.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// URL could not be parsed or is not http/https.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// Curl reported an error (timeout, DNS, connection refused, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// Server answered with something other than 200.
    #[error("HTTP {0}")]
    Status(u32),
    /// Watermark request body could not be encoded.
    #[error("encode watermark payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Downloads `url` with a plain GET and returns the response body.
///
/// Failures are logged with the URL and cause, then returned; this never panics.
pub fn fetch_image(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    tracing::debug!("GET {}", url);
    http::get(url, None, opts).map_err(|e| {
        tracing::warn!("{}. Could not download the image from: {}", e, url);
        e
    })
}

/// Asks the watermark service to composite `watermark_url` onto `img_url`
/// and returns the resulting image bytes.
///
/// The styling parameters are fixed (see [`WatermarkPayload`]). Failures are
/// logged and returned like [`fetch_image`].
pub fn fetch_with_watermark(
    img_url: &str,
    watermark_url: &str,
    opts: &FetchOptions,
) -> Result<Vec<u8>, FetchError> {
    let result = WatermarkPayload::new(img_url, watermark_url)
        .to_json()
        .map_err(FetchError::from)
        .and_then(|body| {
            tracing::debug!(
                "GET {} (watermark {} onto {})",
                opts.watermark_endpoint,
                watermark_url,
                img_url
            );
            http::get(&opts.watermark_endpoint, Some(&body), opts)
        });
    result.map_err(|e| {
        tracing::warn!(
            "{}. Could not apply watermark {} to the image: {}",
            e,
            watermark_url,
            img_url
        );
        e
    })
}
