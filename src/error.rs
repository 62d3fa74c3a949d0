//! Error types and Result aliases for venvcmd

use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for venvcmd operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for venvcmd
///
/// Terminal resolution and command composition are total and never produce
/// one of these; only the settings store, the command runner and the
/// configuration loader do.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Command execution errors ===
    /// Command ran but exited unsuccessfully
    #[error("Command '{command}' failed with exit code {}: {stderr}", describe_exit(.exit_code))]
    CommandFailed {
        command: String,
        /// `None` when the process was terminated by a signal
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// Command could not be started
    #[error("Failed to spawn command '{command}': {reason}")]
    CommandSpawnFailed { command: String, reason: String },

    /// Command did not finish in time
    #[error("Command '{command}' timed out after {duration:?}")]
    CommandTimeout { command: String, duration: Duration },

    // === Settings errors ===
    /// Failed to write a setting to the store
    #[error("Failed to write setting '{key}': {reason}")]
    SettingWriteFailed { key: String, reason: String },

    /// Restoring a scoped setting override failed after the body had already failed
    #[error("Failed to restore setting '{key}': {reason} (body error: {body_error})")]
    SettingRestoreFailed {
        key: String,
        reason: String,
        body_error: String,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Platform name not recognised
    #[error("Unknown platform: '{0}'")]
    UnknownPlatform(String),

    // === I/O errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Generic fallback (use sparingly) ===
    #[error("Error: {0}")]
    Other(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

impl Error {
    /// Exit code of a failed command, if this error carries one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::CommandFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
