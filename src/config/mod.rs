//! Configuration loading and defaults.
//!
//! Configuration is optional: with no file present every field falls back
//! to its default, so the binary works out of the box. The file is YAML,
//! looked up from `$SACMAN_CONFIG` first and the platform config directory
//! second.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "SACMAN_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Program name emitted at the front of every generated command.
    #[serde(default = "default_program")]
    pub program: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Print the explanation and `--> Executing:` line before running.
    #[serde(default = "default_true")]
    pub announce: bool,
}

fn default_program() -> String {
    "systemctl".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { announce: true }
    }
}

impl Config {
    /// Load configuration from a specific file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration from `$SACMAN_CONFIG`, then the platform config
    /// directory, then defaults.
    ///
    /// # Errors
    /// Returns an error only when a file was found but cannot be loaded.
    pub fn load_default() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from_file(path);
        }
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// The conventional config file location, if a config directory exists.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sacman").join("config.yaml"))
    }
}
