//! Task strings and one-shot execution inside a venv

use super::VenvCommandComposer;
use crate::error::Result;
use crate::execution::{CommandOutput, CommandRunner, OutputSink};
use crate::models::{TerminalDialect, BASH_AND_CMD_SEPARATOR};
use crate::settings::{SettingsStore, EXTENSION_PREFIX, PYTHON_VENV_SETTING};
use crate::terminal::resolve_from_settings;
use std::path::Path;
use tracing::info;

/// Venv name configured in the extension settings, if any
pub async fn configured_venv<S>(store: &S) -> Result<Option<String>>
where
    S: SettingsStore + ?Sized,
{
    Ok(store
        .get(PYTHON_VENV_SETTING, Some(EXTENSION_PREFIX))
        .await?
        .filter(|name| !name.is_empty()))
}

impl VenvCommandComposer {
    /// Build the task string for `command` from the settings in `store`.
    ///
    /// The dialect follows the integrated terminal setting and the venv
    /// comes from the extension's `pythonVenv` setting. Without a configured
    /// venv the command is returned unchanged.
    pub async fn convert_to_venv_task<S>(&self, store: &S, command: &str) -> Result<String>
    where
        S: SettingsStore + ?Sized,
    {
        let dialect = resolve_from_settings(store, self.platform).await?;
        let venv_name = configured_venv(store).await?;
        Ok(self.compose(dialect, venv_name.as_deref(), command))
    }

    /// Run `command` in `working_dir` with `venv_name` activated.
    ///
    /// The host dialect is used regardless of the user's terminal setting,
    /// and statements are always joined with ` && `. Failures from `runner`
    /// are returned as they are.
    pub async fn run_in_venv<R>(
        &self,
        runner: &R,
        sink: &dyn OutputSink,
        venv_name: &str,
        working_dir: &Path,
        command: &str,
    ) -> Result<CommandOutput>
    where
        R: CommandRunner + ?Sized,
    {
        let dialect = TerminalDialect::for_host(self.platform);
        let command_line = format!(
            "{}{}{}",
            self.activate_command(venv_name, dialect),
            BASH_AND_CMD_SEPARATOR,
            command
        );

        info!("Running in venv {}: {}", venv_name, command_line);
        runner.execute(sink, working_dir, &command_line).await
    }
}
