//! Core data models for venvcmd
//!
//! Terminal dialects describe the syntax a command line is written in;
//! setting snapshots capture a configuration value so it can be put back.

pub mod setting_snapshot;
pub mod terminal_dialect;

// Re-exports for convenience
pub use setting_snapshot::SettingSnapshot;
pub use terminal_dialect::{TerminalDialect, BASH_AND_CMD_SEPARATOR, POWERSHELL_SEPARATOR};
