//! Output sinks

use std::sync::Mutex;
use tracing::info;

/// Receives command output one line at a time, without line terminators
pub trait OutputSink: Send + Sync {
    fn append_line(&self, line: &str);
}

/// Forwards every line to the `tracing` subscriber
#[derive(Debug, Clone)]
pub struct TracingSink {
    label: String,
}

impl TracingSink {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new("venv")
    }
}

impl OutputSink for TracingSink {
    fn append_line(&self, line: &str) {
        info!("[{}] {}", self.label, line);
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// All lines joined with `\n`
    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }
}

impl OutputSink for BufferSink {
    fn append_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}
