//! Configuration File Loading
//!
//! Looks for `config.toml` in the usual places and falls back to defaults
//! when none exists.

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "VENVCMD_CONFIG";

/// Longest accepted command timeout
const MAX_TIMEOUT_SECS: u64 = 24 * 60 * 60;

/// Outcome of a configuration search
#[derive(Debug)]
pub struct ConfigSearch {
    /// Loaded configuration, or defaults when no file loaded
    pub config: Config,
    /// File the configuration came from
    pub source: Option<PathBuf>,
    /// Files that exist but failed to load, in search order
    pub skipped: Vec<(PathBuf, Error)>,
}

/// Configuration file loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Search paths for configuration files, in priority order
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
        }
    }

    /// Load configuration from the default search paths
    pub fn load() -> Result<Config> {
        Self::new().find_and_load()
    }

    /// Load configuration from an explicit path; the file must exist
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let config = Self::load_config_file(path)?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Load the first configuration file found, or defaults
    ///
    /// Files that fail to load are logged and skipped.
    pub fn find_and_load(&self) -> Result<Config> {
        let search = self.search()?;
        for (path, e) in &search.skipped {
            warn!("Failed to load config from {}: {}", path.display(), e);
        }
        Ok(search.config)
    }

    /// Search for the first loadable configuration file without logging.
    ///
    /// Callers that install their log subscriber from the loaded config
    /// report [`ConfigSearch::skipped`] once the subscriber exists.
    pub fn search(&self) -> Result<ConfigSearch> {
        let mut skipped = Vec::new();

        for path in &self.search_paths {
            if !path.exists() {
                continue;
            }

            match Self::load_config_file(path) {
                Ok(config) => {
                    Self::validate_config(&config)?;
                    return Ok(ConfigSearch {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    });
                }
                // Keep searching
                Err(e) => skipped.push((path.clone(), e)),
            }
        }

        Ok(ConfigSearch {
            config: Config::default(),
            source: None,
            skipped,
        })
    }

    fn load_config_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
            if !explicit.is_empty() {
                paths.push(PathBuf::from(explicit));
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("venvcmd").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".venvcmd.toml"));
        }

        paths
    }

    /// Validate configuration
    pub fn validate_config(config: &Config) -> Result<()> {
        if let Some(timeout) = config.execution.timeout_secs {
            if timeout == 0 {
                return Err(Error::ConfigValidationFailed {
                    field: "execution.timeout_secs".to_string(),
                    reason: "Timeout must be greater than 0".to_string(),
                });
            }
            if timeout > MAX_TIMEOUT_SECS {
                return Err(Error::ConfigValidationFailed {
                    field: "execution.timeout_secs".to_string(),
                    reason: "Timeout cannot exceed 24 hours (86400 seconds)".to_string(),
                });
            }
        }

        if config.logging.level.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "logging.level".to_string(),
                reason: "Log level cannot be empty".to_string(),
            });
        }

        if let Some(path) = &config.settings_file {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidationFailed {
                    field: "settings_file".to_string(),
                    reason: "Settings file path cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Clear all search paths and add a single path
    pub fn set_search_path(&mut self, path: PathBuf) {
        self.search_paths = vec![path];
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
