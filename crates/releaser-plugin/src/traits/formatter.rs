//! Changelog formatter trait.

use releaser_commit::Change;
use serde::{Deserialize, Serialize};

use super::Plugin;
use super::classifier::CommitClassifier;

/// A release to be formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// The heading of the section, usually the release tag.
    pub heading: String,

    /// The classified changes, in commit order.
    pub changes: Vec<Change>,
}

impl Release {
    /// Creates a new release.
    #[must_use]
    pub fn new(heading: impl Into<String>, changes: Vec<Change>) -> Self {
        Self {
            heading: heading.into(),
            changes,
        }
    }

    /// Returns true if the release has no changes to list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Formats changelog output.
pub trait ChangelogFormatter: Plugin {
    /// Formats a release into a changelog section.
    ///
    /// Section titles come from the classifier that produced the changes.
    fn format(&self, release: &Release, classifier: &dyn CommitClassifier) -> String;
}
