//! Venv Command Composer
//!
//! Builds command lines that activate a Python virtual environment before
//! running a user command. The composer is tied to the platform whose venv
//! layout it targets (`Scripts` on Windows, `bin` elsewhere); the dialect
//! passed to each call decides the separator, the path spelling and the
//! activation syntax.
//!
//! ```
//! use venvcmd::models::TerminalDialect;
//! use venvcmd::platform::Platform;
//! use venvcmd::venv::VenvCommandComposer;
//!
//! let composer = VenvCommandComposer::new(Platform::Linux);
//! assert_eq!(
//!     composer.compose(TerminalDialect::PosixShell, Some(".env"), "func pack"),
//!     ". .env/bin/activate && func pack"
//! );
//! ```

mod task;

pub use task::configured_venv;

use crate::models::TerminalDialect;
use crate::platform::Platform;
use tracing::debug;

/// Final path segment of every activation script
const ACTIVATE_SCRIPT: &str = "activate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenvCommandComposer {
    platform: Platform,
}

impl VenvCommandComposer {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn for_current_platform() -> Self {
        Self::new(Platform::current())
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Relative path of the activation script, spelled for `dialect`
    pub fn activate_path(&self, venv_name: &str, dialect: TerminalDialect) -> String {
        dialect.path_style().join([
            ".",
            venv_name,
            self.platform.venv_bin_dir(),
            ACTIVATE_SCRIPT,
        ])
    }

    /// Statement that activates `venv_name` in a `dialect` session
    pub fn activate_command(&self, venv_name: &str, dialect: TerminalDialect) -> String {
        dialect.activation_invocation(&self.activate_path(venv_name, dialect))
    }

    /// Prefix `command` with the activation of `venv_name`.
    ///
    /// Without a venv (or with an empty name) `command` is returned as is.
    /// The user's command is always the final segment, unmodified.
    pub fn compose(
        &self,
        dialect: TerminalDialect,
        venv_name: Option<&str>,
        command: &str,
    ) -> String {
        let mut commands: Vec<String> = Vec::with_capacity(2);
        if let Some(venv_name) = venv_name.filter(|name| !name.is_empty()) {
            commands.push(self.activate_command(venv_name, dialect));
        }
        commands.push(command.to_string());

        let line = commands.join(dialect.separator());
        debug!(
            "Composed {} command line for {}: {}",
            dialect.as_str(),
            self.platform,
            line
        );
        line
    }
}

impl Default for VenvCommandComposer {
    fn default() -> Self {
        Self::for_current_platform()
    }
}
