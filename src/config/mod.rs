//! Configuration management for logsift.
//!
//! A small TOML file supplies defaults the CLI flags can override: the
//! `log show` time window, per-command record limits, and alternate
//! report/log directories. A missing file is not an error — defaults
//! apply. logsift never writes configuration; the file is user-managed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// Configuration file location relative to the user config directory.
pub const CONFIG_FILE: &str = "logsift/config.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default values CLI flags fall back to.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Directory overrides for file-based parsers.
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SiftError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| SiftError::InvalidConfig {
            message: e.to_string(),
        })
    }
}

/// Default values for CLI parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Time window for `log show --last`.
    #[serde(default = "default_time_period")]
    pub time_period: String,
    /// Record limit for the `show` command.
    #[serde(default = "default_show_limit")]
    pub show_limit: usize,
    /// Record limit for the `crashes` command.
    #[serde(default = "default_crash_limit")]
    pub crash_limit: usize,
    /// Record limit for the `packages` command.
    #[serde(default = "default_package_limit")]
    pub package_limit: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            time_period: default_time_period(),
            show_limit: default_show_limit(),
            crash_limit: default_crash_limit(),
            package_limit: default_package_limit(),
        }
    }
}

/// Directory overrides for the file-based parsers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Crash report directories to search instead of the defaults.
    #[serde(default)]
    pub crash_report_dirs: Option<Vec<PathBuf>>,
    /// Package log directories to search instead of the defaults.
    #[serde(default)]
    pub package_log_dirs: Option<Vec<PathBuf>>,
}

fn default_time_period() -> String {
    "1h".to_string()
}

fn default_show_limit() -> usize {
    100
}

fn default_crash_limit() -> usize {
    20
}

fn default_package_limit() -> usize {
    50
}

/// Path of the user configuration file, when a config directory exists.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
