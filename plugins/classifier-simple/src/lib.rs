//! Plain subject-line classifier plugin.

use releaser_commit::{Change, Commit};
use releaser_plugin::{CommitClassifier, Plugin};

/// The single category this classifier produces.
pub const CHANGES_CATEGORY: &str = "changes";

/// Subjects git generates for merges and reverts.
const NOISE_PREFIXES: [&str; 2] = ["Merge ", "Revert "];

/// Classifier for repositories without a commit convention.
///
/// Every commit except merge and revert noise becomes a `changes` entry
/// holding its subject line.
pub struct SimpleClassifier;

impl SimpleClassifier {
    /// Creates a new simple classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SimpleClassifier {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Lists every commit subject under a single section"
    }
}

impl CommitClassifier for SimpleClassifier {
    fn classify(&self, commit: &Commit) -> Option<Change> {
        let message = commit.message.trim();

        if NOISE_PREFIXES
            .iter()
            .any(|prefix| message.starts_with(prefix))
        {
            return None;
        }

        let first_line = message.lines().next().unwrap_or_default().trim();
        if first_line.is_empty() {
            return None;
        }

        Some(Change::new(CHANGES_CATEGORY, first_line))
    }

    fn title_for(&self, _category: &str) -> String {
        "Changes".to_string()
    }
}
