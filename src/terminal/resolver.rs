//! Terminal Resolver
//!
//! Decides which shell dialect a task string must be written in, from the
//! platform and the shell the user configured for the integrated terminal.

use crate::error::Result;
use crate::models::TerminalDialect;
use crate::platform::Platform;
use crate::settings::{SettingsStore, TERMINAL_PREFIX, WINDOWS_SHELL_SETTING};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static POWERSHELL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(powershell|pwsh)").expect("valid PowerShell pattern"));

static BASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)bash").expect("valid bash pattern"));

/// Resolve the dialect for `platform`.
///
/// Outside Windows the configured shell is ignored and the result is always
/// [`TerminalDialect::PosixShell`]. On Windows an unset shell means
/// PowerShell, the platform default. Matching is a case-insensitive
/// substring test on the whole configured text, so a path such as
/// `C:\Program Files\Git\bin\bash.exe` resolves to a POSIX shell.
pub fn resolve(platform: Platform, configured_shell: Option<&str>) -> TerminalDialect {
    if !platform.is_windows() {
        return TerminalDialect::PosixShell;
    }

    match configured_shell {
        None => TerminalDialect::PowerShell,
        Some(shell) if POWERSHELL_PATTERN.is_match(shell) => TerminalDialect::PowerShell,
        Some(shell) if BASH_PATTERN.is_match(shell) => TerminalDialect::PosixShell,
        Some(_) => TerminalDialect::WindowsCmd,
    }
}

/// Resolve the dialect using the integrated terminal setting from `store`.
///
/// The setting is only read on Windows.
pub async fn resolve_from_settings<S>(store: &S, platform: Platform) -> Result<TerminalDialect>
where
    S: SettingsStore + ?Sized,
{
    let configured_shell = if platform.is_windows() {
        store
            .get(WINDOWS_SHELL_SETTING, Some(TERMINAL_PREFIX))
            .await?
    } else {
        None
    };

    let dialect = resolve(platform, configured_shell.as_deref());
    debug!(
        "Resolved terminal dialect {} for {} (configured shell: {:?})",
        dialect.as_str(),
        platform,
        configured_shell
    );
    Ok(dialect)
}
