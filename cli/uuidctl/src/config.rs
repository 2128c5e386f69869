//! Configuration loading.
//!
//! Settings come from `config.json` in the platform config directory, then
//! environment overrides. The backend is overridden by `--backend` /
//! `UUIDCTL_BACKEND`, which clap resolves.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Overrides the log level when RUST_LOG is unset.
const ENV_LOG_LEVEL: &str = "UUIDCTL_LOG_LEVEL";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "uuidcol", "uuidctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default backend descriptor or adapter name.
    #[serde(default)]
    pub backend: Option<String>,

    /// Log level filter used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);
        let config = Self::load_from(&path)?;
        Ok(config.with_overrides(std::env::var(ENV_LOG_LEVEL).ok()))
    }

    /// Load config from a specific file, or return defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment overrides; empty values are ignored.
    fn with_overrides(mut self, log_level: Option<String>) -> Self {
        if let Some(level) = log_level.filter(|l| !l.trim().is_empty()) {
            self.log_level = level;
        }
        self
    }
}
