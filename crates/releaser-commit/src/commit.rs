//! Commit type as read from the history.

use serde::{Deserialize, Serialize};

/// A commit as read from the version-control history, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The raw commit message. May span several lines.
    pub message: String,
}

impl Commit {
    /// Creates a new commit.
    #[must_use]
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
        }
    }

    /// Returns the first line of the commit message (the subject).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.as_str(), |(end, _)| &self.hash[..end])
    }
}
