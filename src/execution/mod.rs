//! Command execution
//!
//! Command composition never spawns processes; a finished command line is handed
//! to a [`CommandRunner`] together with an [`OutputSink`] that receives the
//! command's output line by line. [`ShellRunner`] is the default runner.

mod shell_runner;
mod sink;

pub use shell_runner::ShellRunner;
pub use sink::{BufferSink, OutputSink, TracingSink};

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output of a command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Service that runs a shell command line in a directory
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `working_dir`, streaming output to `sink`.
    ///
    /// # Errors
    /// [`crate::error::Error::CommandFailed`] on a non-zero exit,
    /// [`crate::error::Error::CommandSpawnFailed`] when the process
    /// cannot be started.
    async fn execute(
        &self,
        sink: &dyn OutputSink,
        working_dir: &Path,
        command: &str,
    ) -> Result<CommandOutput>;
}
