//! Captured value of a single setting

use crate::error::Result;
use crate::settings::{full_key, SettingsStore};
use serde::{Deserialize, Serialize};

/// Value of `(key, scope)` at the moment it was captured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingSnapshot {
    pub key: String,
    /// `None` when the setting was unset
    pub value: Option<String>,
    pub scope: Option<String>,
}

impl SettingSnapshot {
    /// Read the current value of `(key, scope)` from `store`
    pub async fn capture<S>(store: &S, key: &str, scope: Option<&str>) -> Result<Self>
    where
        S: SettingsStore + ?Sized,
    {
        let value = store.get(key, scope).await?;
        Ok(Self {
            key: key.to_string(),
            value,
            scope: scope.map(str::to_string),
        })
    }

    /// Write the captured value back, removing the setting if it was unset
    pub async fn restore<S>(&self, store: &S) -> Result<()>
    where
        S: SettingsStore + ?Sized,
    {
        store
            .set(&self.key, self.value.as_deref(), self.scope.as_deref())
            .await
    }

    pub fn full_key(&self) -> String {
        full_key(&self.key, self.scope.as_deref())
    }
}
