//! Classified changelog entry.

use serde::{Deserialize, Serialize};

/// A changelog entry produced by a classifier from exactly one commit.
///
/// `content` is a single, non-empty line. Classifiers reject a commit rather
/// than build a `Change` that breaks this; see [`Change::is_renderable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Change {
    /// The classification key (feat, fix, changes, ...). Case-sensitive.
    pub category: String,

    /// The human-readable description rendered as one bullet.
    pub content: String,
}

impl Change {
    /// Creates a new change.
    #[must_use]
    pub fn new(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            content: content.into(),
        }
    }

    /// Returns true if this change can be rendered as a single bullet line.
    ///
    /// Both fields must be non-blank and the content must not contain a line
    /// break.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.category.trim().is_empty()
            && !self.content.trim().is_empty()
            && !self.content.contains(['\n', '\r'])
    }
}
