//! Runs command lines through the host's shell

use super::{CommandOutput, CommandRunner, OutputSink};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Spawns `sh -c <command>` (`cmd /C <command>` on Windows)
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    /// Extra environment variables for the child
    env_vars: HashMap<String, String>,
    /// No limit when unset
    timeout: Option<Duration>,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`Error::CommandTimeout`] if the command runs longer than `duration`
    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set environment variable
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn shell_command(command: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").raw_arg(command);
            cmd
        }

        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }

    async fn run(
        &self,
        sink: &dyn OutputSink,
        working_dir: &Path,
        command: &str,
    ) -> Result<CommandOutput> {
        let mut child = Self::shell_command(command)
            .current_dir(working_dir)
            .envs(&self.env_vars)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::CommandSpawnFailed {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        let (stdout, stderr) = tokio::join!(
            pump_lines(child.stdout.take(), sink),
            pump_lines(child.stderr.take(), sink)
        );
        let status = child.wait().await?;
        let (stdout, stderr) = (stdout?, stderr?);

        match status.code() {
            Some(0) => Ok(CommandOutput {
                exit_code: 0,
                stdout,
                stderr,
            }),
            exit_code => Err(Error::CommandFailed {
                command: command.to_string(),
                exit_code,
                stdout,
                stderr,
            }),
        }
    }
}

/// Forward each line of `reader` to `sink` and return everything read
async fn pump_lines<R>(reader: Option<R>, sink: &dyn OutputSink) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut collected = String::new();
    let Some(reader) = reader else {
        return Ok(collected);
    };

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(|c: char| c == '\n' || c == '\r');
        sink.append_line(line);
        collected.push_str(line);
        collected.push('\n');
    }

    Ok(collected)
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn execute(
        &self,
        sink: &dyn OutputSink,
        working_dir: &Path,
        command: &str,
    ) -> Result<CommandOutput> {
        info!("Running command \"{}\" in {}", command, working_dir.display());

        let result = match self.timeout {
            Some(duration) => timeout(duration, self.run(sink, working_dir, command))
                .await
                .map_err(|_| Error::CommandTimeout {
                    command: command.to_string(),
                    duration,
                })?,
            None => self.run(sink, working_dir, command).await,
        };

        match &result {
            Ok(output) => debug!("Command \"{}\" finished with exit code {}", command, output.exit_code),
            Err(e) => warn!("Command \"{}\" failed: {}", command, e),
        }
        result
    }
}
