//! Writing fetched image bytes to disk under a normalized name.

use crate::name_format::format_name;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

fn is_sep(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Builds the destination path for `filename`.
///
/// The filename goes through [`format_name`]; the directory is used as given,
/// byte for byte. Leading separators of the filename are stripped so it always
/// lands inside `directory`.
pub fn resolve_path(filename: &str, directory: Option<&Path>) -> PathBuf {
    let name = format_name(filename);
    match directory {
        Some(dir) => dir.join(name.trim_start_matches(is_sep)),
        None => PathBuf::from(name),
    }
}

/// Saves `bytes` as `filename` (optionally inside `directory`) and returns the written path.
///
/// Creates `directory` and any missing parents. Truncates an existing file.
pub fn save_image(bytes: &[u8], filename: &str, directory: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = directory {
        fs::create_dir_all(dir)
            .with_context(|| format!("create directory {}", dir.display()))?;
    }

    let path = resolve_path(filename, directory);
    let mut file =
        File::create(&path).with_context(|| format!("create {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("write {}", path.display()))?;
    file.flush()
        .with_context(|| format!("flush {}", path.display()))?;

    tracing::info!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
