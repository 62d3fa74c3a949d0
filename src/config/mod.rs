//! Configuration management for venvcmd
//!
//! This is the tool's own configuration (where the editor settings live,
//! how commands are executed, how much to log), not the editor settings
//! themselves, which are read through [`crate::settings::SettingsStore`].

pub mod loader;

pub use loader::{ConfigLoader, ConfigSearch};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for venvcmd
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor `settings.json` to read and write; in-memory settings when unset
    pub settings_file: Option<PathBuf>,

    /// Command execution configuration
    pub execution: ExecutionConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Command execution configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Abort commands running longer than this; no limit when unset
    pub timeout_secs: Option<u64>,

    /// Extra environment variables for executed commands
    pub environment: std::collections::HashMap<String, String>,
}

impl ExecutionConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
