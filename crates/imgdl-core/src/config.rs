use crate::fetch::{FetchOptions, DEFAULT_WATERMARK_ENDPOINT};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/imgdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgdlConfig {
    /// Per-request timeout in seconds, applied to plain and watermark fetches.
    pub timeout_secs: u64,
    /// Watermark-compositing endpoint.
    pub watermark_endpoint: String,
    /// Optional `User-Agent` header for outgoing requests.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Directory used when the caller does not pass one (None = current directory).
    #[serde(default)]
    pub default_directory: Option<PathBuf>,
}

impl Default for ImgdlConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            watermark_endpoint: DEFAULT_WATERMARK_ENDPOINT.to_string(),
            user_agent: None,
            default_directory: None,
        }
    }
}

impl ImgdlConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            watermark_endpoint: self.watermark_endpoint.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ImgdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
