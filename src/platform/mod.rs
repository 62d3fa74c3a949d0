//! Platform abstraction layer
//!
//! The operating system is always an explicit value here rather than a
//! process-wide lookup, so callers can compose command lines for a platform
//! other than the one they run on. [`Platform::current`] is the only place
//! that looks at the compile target.

mod paths;

pub use paths::PathStyle;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system a command line is composed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    FreeBsd,
    OpenBsd,
    NetBsd,
    Aix,
    SunOs,
    Android,
    /// Any other POSIX-like system
    Other,
}

impl Platform {
    /// Platform of the running binary
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "freebsd") {
            Platform::FreeBsd
        } else if cfg!(target_os = "openbsd") {
            Platform::OpenBsd
        } else if cfg!(target_os = "netbsd") {
            Platform::NetBsd
        } else if cfg!(target_os = "aix") {
            Platform::Aix
        } else if cfg!(any(target_os = "solaris", target_os = "illumos")) {
            Platform::SunOs
        } else if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Directory inside a virtual environment that holds its activation scripts
    pub fn venv_bin_dir(&self) -> &'static str {
        if self.is_windows() {
            "Scripts"
        } else {
            "bin"
        }
    }

    /// Get a string representation of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
            Platform::FreeBsd => "freebsd",
            Platform::OpenBsd => "openbsd",
            Platform::NetBsd => "netbsd",
            Platform::Aix => "aix",
            Platform::SunOs => "sunos",
            Platform::Android => "android",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    /// Accepts both Node-style (`win32`, `darwin`) and Rust-style
    /// (`windows`, `macos`) names, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows" | "win32" | "win" => Ok(Platform::Windows),
            "macos" | "darwin" | "mac" | "osx" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            "freebsd" => Ok(Platform::FreeBsd),
            "openbsd" => Ok(Platform::OpenBsd),
            "netbsd" => Ok(Platform::NetBsd),
            "aix" => Ok(Platform::Aix),
            "sunos" | "solaris" | "illumos" => Ok(Platform::SunOs),
            "android" => Ok(Platform::Android),
            "other" => Ok(Platform::Other),
            _ => Err(Error::UnknownPlatform(s.to_string())),
        }
    }
}
