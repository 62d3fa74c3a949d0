//! Settings stores
//!
//! The host application's configuration store is an external service; this
//! module defines the seam the core reads and writes it through, plus two
//! stores: an in-memory one and one backed by an editor `settings.json`.
//!
//! Keys are dotted names. When a scope is given the stored key is
//! `scope.key`, so `("pythonVenv", Some("azureFunctions"))` addresses
//! `azureFunctions.pythonVenv`.

mod json_file;
mod memory;
mod scoped;

pub use json_file::JsonFileSettings;
pub use memory::MemorySettings;
pub use scoped::with_setting;

use crate::error::Result;
use async_trait::async_trait;

/// Scope holding the extension's own settings
pub const EXTENSION_PREFIX: &str = "azureFunctions";

/// Name of the virtual environment directory, in [`EXTENSION_PREFIX`]
pub const PYTHON_VENV_SETTING: &str = "pythonVenv";

/// Scope holding integrated terminal settings
pub const TERMINAL_PREFIX: &str = "terminal";

/// Shell the integrated terminal uses on Windows, in [`TERMINAL_PREFIX`]
pub const WINDOWS_SHELL_SETTING: &str = "integrated.shell.windows";

/// Key/value configuration store
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read a setting; `Ok(None)` when it is not set
    async fn get(&self, key: &str, scope: Option<&str>) -> Result<Option<String>>;

    /// Write a setting; `None` removes it
    async fn set(&self, key: &str, value: Option<&str>, scope: Option<&str>) -> Result<()>;
}

/// Dotted key a `(key, scope)` pair is stored under
pub fn full_key(key: &str, scope: Option<&str>) -> String {
    match scope {
        Some(prefix) if !prefix.is_empty() => format!("{}.{}", prefix, key),
        _ => key.to_string(),
    }
}
