use crate::constants::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::error::{Result, SyncError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Pause between consecutive sync requests; 0 disables the pause
    #[serde(default)]
    pub delay_ms: u64,
    /// Sent as a bearer Authorization header when set
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            delay_ms: 0,
            api_token: None,
        }
    }
}

impl Config {
    /// Load config.toml from the working directory. A missing file is not an
    /// error; the defaults apply. The base URL can be overridden through the
    /// environment either way.
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        let mut config = if Path::new(config_path).exists() {
            let config_content = fs::read_to_string(config_path).map_err(|e| {
                SyncError::Config(format!(
                    "Failed to read config file '{}': {}",
                    config_path, e
                ))
            })?;
            toml::from_str(&config_content)?
        } else {
            Config {
                sync: SyncConfig::default(),
            }
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.sync.base_url = base_url;
            }
        }

        Ok(config)
    }
}
