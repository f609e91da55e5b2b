//! Filename hints derived from image URLs.

/// Extracts the last path segment from a URL for use as a filename hint.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
/// Percent-encoded segments are decoded (`caf%C3%A9.png` → `café.png`).
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    let decoded = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}
