//! venvcmd - shell command lines that run inside a Python virtual environment
//!
//! Given a platform and the shell a user configured for their terminal, this
//! library works out which shell dialect a command line has to be written in
//! (POSIX shell, Windows cmd or PowerShell) and prefixes a user command with
//! the statement that activates a virtual environment.
//!
//! ## Module Organization
//!
//! - [`terminal`] - Terminal dialect resolution from platform and configured shell
//! - [`venv`] - Activation paths, activation commands, task strings, venv execution
//! - [`models`] - Terminal dialects and setting snapshots
//! - [`platform`] - Platform enumeration and path joining conventions
//! - [`settings`] - Settings store seam, in-memory and `settings.json` stores, scoped overrides
//! - [`execution`] - Command runner seam, output sinks, the default shell runner
//! - [`config`] - Tool configuration loading and validation
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Example
//!
//! ```
//! use venvcmd::platform::Platform;
//! use venvcmd::terminal::resolve;
//! use venvcmd::venv::VenvCommandComposer;
//!
//! let dialect = resolve(Platform::Windows, Some(r"C:\Windows\System32\cmd.exe"));
//! let line = VenvCommandComposer::new(Platform::Windows).compose(dialect, Some(".env"), "func pack");
//! assert_eq!(line, r".env\Scripts\activate && func pack");
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod models;
pub mod platform;
pub mod settings;
pub mod terminal;
pub mod venv;

pub use error::{Error, Result};
pub use models::TerminalDialect;
pub use platform::Platform;
pub use venv::VenvCommandComposer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
