//! Settings backed by an editor `settings.json`
//!
//! The file is a flat JSON object keyed by dotted setting names, e.g.
//! `{"azureFunctions.pythonVenv": ".env"}`. Values that are not strings are
//! preserved on write but read as unset.

use super::{full_key, SettingsStore};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug)]
pub struct JsonFileSettings {
    path: PathBuf,
    values: Mutex<Map<String, Value>>,
}

impl JsonFileSettings {
    /// Load settings from `path`; a missing file is an empty store
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = match fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => parse_settings(&path, &content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Settings file {} does not exist yet", path.display());
                Map::new()
            }
            Err(e) => {
                return Err(Error::ConfigLoadFailed {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, key: &str, values: &Map<String, Value>) -> Result<()> {
        let write_failed = |reason: String| Error::SettingWriteFailed {
            key: key.to_string(),
            reason,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| write_failed(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(values).map_err(|e| write_failed(e.to_string()))?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| write_failed(e.to_string()))
    }
}

fn parse_settings(path: &Path, content: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::ConfigParseFailed {
            format: "JSON".to_string(),
            reason: format!("{} does not contain a JSON object", path.display()),
        }),
        Err(e) => Err(Error::ConfigParseFailed {
            format: "JSON".to_string(),
            reason: format!(
                "{} in {} (comments and trailing commas from JSONC are not supported)",
                e,
                path.display()
            ),
        }),
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettings {
    async fn get(&self, key: &str, scope: Option<&str>) -> Result<Option<String>> {
        let values = self.values.lock().await;
        Ok(values
            .get(&full_key(key, scope))
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn set(&self, key: &str, value: Option<&str>, scope: Option<&str>) -> Result<()> {
        let key = full_key(key, scope);
        let mut values = self.values.lock().await;

        // Memory only changes once the file has been written
        let mut updated = values.clone();
        match value {
            Some(value) => {
                updated.insert(key.clone(), Value::String(value.to_string()));
            }
            None => {
                updated.remove(&key);
            }
        }

        self.persist(&key, &updated).await?;
        *values = updated;
        Ok(())
    }
}
