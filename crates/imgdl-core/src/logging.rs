//! Log setup for the imgdl binary.
//!
//! Events go to `$XDG_STATE_HOME/imgdl/imgdl.log` (appended across runs). When
//! that file cannot be opened the CLI falls back to [`init_logging_stderr`].
//! `RUST_LOG` overrides [`DEFAULT_FILTER`] in both cases.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset: per-request detail from our crates, info elsewhere.
pub const DEFAULT_FILTER: &str = "info,imgdl_core=debug,imgdl_cli=debug";

const LOG_FILE_NAME: &str = "imgdl.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Opens `<state_dir>/imgdl.log` for appending, creating the directory as needed.
pub fn open_log_file(state_dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(state_dir)
        .with_context(|| format!("create log directory {}", state_dir.display()))?;
    let path = state_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    Ok((path, file))
}

/// Installs the global subscriber writing to the XDG state log file.
/// Returns Err (nothing installed) so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgdl")?;
    let (path, file) = open_log_file(&xdg_dirs.get_state_home())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!("imgdl logging initialized at {}", path.display());
    Ok(())
}

/// Installs a stderr-only subscriber. A no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
