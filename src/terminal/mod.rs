//! Terminal detection
//!
//! Maps a platform and a configured shell to the dialect a command line is
//! written in.

pub mod resolver;

// Re-exports for convenience
pub use resolver::{resolve, resolve_from_settings};
