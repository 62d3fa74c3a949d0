//! In-memory settings store

use super::{full_key, SettingsStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with fully qualified keys
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of settings currently stored
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl SettingsStore for MemorySettings {
    async fn get(&self, key: &str, scope: Option<&str>) -> Result<Option<String>> {
        Ok(self.values.read().await.get(&full_key(key, scope)).cloned())
    }

    async fn set(&self, key: &str, value: Option<&str>, scope: Option<&str>) -> Result<()> {
        let key = full_key(key, scope);
        let mut values = self.values.write().await;
        match value {
            Some(value) => {
                values.insert(key, value.to_string());
            }
            None => {
                values.remove(&key);
            }
        }
        Ok(())
    }
}
