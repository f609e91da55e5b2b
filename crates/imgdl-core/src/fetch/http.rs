//! Blocking GET on a single curl easy handle, collecting the body in memory.

use super::{FetchError, FetchOptions};

/// Performs a GET against `url` and returns the body if the final status is 200.
///
/// When `json_body` is set it is sent as the request body with
/// `Content-Type: application/json` while keeping the GET method.
pub(super) fn get(
    url: &str,
    json_body: Option<&[u8]>,
    opts: &FetchOptions,
) -> Result<Vec<u8>, FetchError> {
    check_url(url)?;

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.timeout(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    if let Some(payload) = json_body {
        // COPYPOSTFIELDS switches libcurl to POST; force the verb back to GET.
        easy.post_fields_copy(payload)?;
        easy.custom_request("GET")?;
        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        return Err(FetchError::Status(code));
    }

    Ok(body)
}

/// Rejects anything that is not an absolute http(s) URL before touching the network.
fn check_url(url: &str) -> Result<(), FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(FetchError::InvalidUrl(format!(
            "{url}: unsupported scheme {other}"
        ))),
    }
}
