//! Path joining conventions
//!
//! A terminal dialect decides how an activation path is spelled, which is
//! not necessarily the convention of the machine composing it (Git Bash on
//! Windows wants forward slashes). These joins are purely textual and never
//! touch the filesystem.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `/` separated
    Posix,
    /// `\` separated, `/` also accepted on input
    Windows,
}

impl PathStyle {
    pub fn separator(&self) -> char {
        match self {
            PathStyle::Posix => '/',
            PathStyle::Windows => '\\',
        }
    }

    fn is_separator(&self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '/' || c == '\\',
        }
    }

    /// Join relative segments and normalise the result.
    ///
    /// Empty and `.` components are dropped, `..` cancels the component
    /// before it when there is one. An empty result is `.`.
    pub fn join<I, S>(&self, segments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parts: Vec<String> = Vec::new();

        for segment in segments {
            for component in segment.as_ref().split(|c| self.is_separator(c)) {
                match component {
                    "" | "." => {}
                    ".." => match parts.last() {
                        Some(last) if last != ".." => {
                            parts.pop();
                        }
                        _ => parts.push("..".to_string()),
                    },
                    other => parts.push(other.to_string()),
                }
            }
        }

        if parts.is_empty() {
            return ".".to_string();
        }

        parts.join(&self.separator().to_string())
    }
}
