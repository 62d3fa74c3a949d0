//! Terminal Dialect Definitions
//!
//! The syntax family of the shell a command line is written for. A dialect
//! is distinct from the operating system: Git Bash on Windows is a
//! [`TerminalDialect::PosixShell`].

use crate::platform::{PathStyle, Platform};
use serde::{Deserialize, Serialize};

/// Separator between statements for bash and cmd
pub const BASH_AND_CMD_SEPARATOR: &str = " && ";

/// Separator between statements for PowerShell
pub const POWERSHELL_SEPARATOR: &str = " ; ";

/// Shell syntax family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalDialect {
    /// bash, zsh, sh and friends
    PosixShell,
    /// Windows Command Prompt
    WindowsCmd,
    /// Windows PowerShell or PowerShell Core
    #[serde(rename = "powershell")]
    PowerShell,
}

impl TerminalDialect {
    /// Dialect used for direct process execution on a platform, ignoring any
    /// user-configured shell
    pub fn for_host(platform: Platform) -> Self {
        if platform.is_windows() {
            TerminalDialect::WindowsCmd
        } else {
            TerminalDialect::PosixShell
        }
    }

    /// Get a string representation of the dialect
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminalDialect::PosixShell => "posix_shell",
            TerminalDialect::WindowsCmd => "windows_cmd",
            TerminalDialect::PowerShell => "powershell",
        }
    }

    /// Token joining two statements on one line
    pub fn separator(&self) -> &'static str {
        match self {
            TerminalDialect::PowerShell => POWERSHELL_SEPARATOR,
            TerminalDialect::PosixShell | TerminalDialect::WindowsCmd => BASH_AND_CMD_SEPARATOR,
        }
    }

    /// How paths are spelled inside this dialect
    pub fn path_style(&self) -> PathStyle {
        match self {
            TerminalDialect::PosixShell => PathStyle::Posix,
            TerminalDialect::WindowsCmd | TerminalDialect::PowerShell => PathStyle::Windows,
        }
    }

    /// Statement that runs an activation script in the current session
    pub fn activation_invocation(&self, activate_path: &str) -> String {
        match self {
            TerminalDialect::PosixShell => format!(". {}", activate_path),
            TerminalDialect::WindowsCmd | TerminalDialect::PowerShell => activate_path.to_string(),
        }
    }
}
