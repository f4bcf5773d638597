//! Commit classifier trait.

use releaser_commit::{Change, Commit};

use super::Plugin;

/// Decides whether and how a commit becomes a changelog entry.
///
/// Classification never fails once a classifier is constructed: a commit is
/// either accepted (one [`Change`]) or rejected (`None`). Rejection is the
/// normal outcome for commits that carry no changelog-worthy message.
pub trait CommitClassifier: Plugin {
    /// Classifies a commit.
    ///
    /// Returns `None` if the commit does not produce a changelog entry.
    fn classify(&self, commit: &Commit) -> Option<Change>;

    /// Returns the section title displayed for a category.
    fn title_for(&self, category: &str) -> String;
}
