//! Runtime configuration for the archive and daily-picture clients

use crate::error::{CanvasError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the configured NASA API key
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// NASA API key for the daily-picture service
    pub nasa_api_key: String,

    /// Daily-picture endpoint
    pub apod_url: String,

    /// MAST invoke endpoint for criteria and product queries
    pub mast_invoke_url: String,

    /// MAST file download endpoint (bare archive URIs are passed as `?uri=`)
    pub mast_download_url: String,

    /// Per-request timeout, seconds
    pub request_timeout_secs: u64,

    /// Response cache lifetime, seconds
    pub cache_ttl_secs: u64,

    /// Gallery size when the caller gives none
    pub default_limit: usize,

    /// Rows per archive page
    pub archive_page_size: usize,

    /// Upper bound on pages fetched for one criteria query
    pub archive_max_pages: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            nasa_api_key: "DEMO_KEY".to_string(),
            apod_url: "https://api.nasa.gov/planetary/apod".to_string(),
            mast_invoke_url: "https://mast.stsci.edu/api/v0/invoke".to_string(),
            mast_download_url: "https://mast.stsci.edu/api/v0.1/Download/file".to_string(),
            request_timeout_secs: 10,
            cache_ttl_secs: 3600,
            default_limit: 30,
            archive_page_size: 2_000,
            archive_max_pages: 2,
        }
    }

    /// Load from `path` (or the default location), then apply environment overrides.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => config_path(),
        };

        let mut config = match path {
            Some(p) if p.exists() => Self::from_file(&p)?,
            _ => Self::new(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CanvasError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&contents).map_err(|e| {
            CanvasError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// `NASA_API_KEY` wins over the file when set and non-empty
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                self.nasa_api_key = key.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(CanvasError::Config(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        if self.archive_page_size == 0 || self.archive_max_pages == 0 {
            return Err(CanvasError::Config(
                "archive_page_size and archive_max_pages must be positive".to_string(),
            ));
        }
        if self.default_limit == 0 {
            return Err(CanvasError::Config(
                "default_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Key rendered as `abcd...wxyz` for display
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.nasa_api_key.chars().collect();
        let head: String = chars.iter().take(4).collect();
        if chars.len() > 8 {
            let tail: String = chars[chars.len() - 4..].iter().collect();
            format!("{}...{}", head, tail)
        } else {
            format!("{}...", head)
        }
    }

    pub fn uses_demo_key(&self) -> bool {
        self.nasa_api_key == "DEMO_KEY"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Default config file location: `<config_dir>/cosmic-canvas/config.json`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cosmic-canvas").join("config.json"))
}
