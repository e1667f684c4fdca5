//! Activity configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "activity.toml";

/// Top-level configuration (activity.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ActivityConfig {
    #[serde(default)]
    pub replay: ReplaySection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Replay defaults
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ReplaySection {
    /// Playback speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Apply the session's starting size before replaying
    #[serde(default = "default_true")]
    pub restore_size: bool,
}

fn default_speed() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

impl Default for ReplaySection {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            restore_size: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct LoggingSection {
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl ActivityConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `activity.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) if path.is_dir() => path.join(CONFIG_FILE),
            Some(path) => path.to_path_buf(),
            None => {
                let local = Path::new(CONFIG_FILE);
                if !local.exists() {
                    return Ok(Self::default());
                }
                local.to_path_buf()
            }
        };

        if !config_path.exists() {
            anyhow::bail!("No config found at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
