//! Classification and rendering pipeline.

use releaser_commit::{Change, Commit};
use releaser_plugin::{ChangelogFormatter, CommitClassifier, Release, ReleaseHook};
use tracing::debug;

/// Classifies commits in order, dropping the ones the classifier rejects.
///
/// Accepted changes keep the order of their source commits. Rejection is a
/// normal outcome and is only traced at debug level.
pub fn classify_all(commits: &[Commit], classifier: &dyn CommitClassifier) -> Vec<Change> {
    commits
        .iter()
        .filter_map(|commit| {
            let change = classifier.classify(commit);
            if change.is_none() {
                debug!(
                    hash = %commit.short_hash(),
                    subject = %commit.subject(),
                    "skipping commit"
                );
            }
            change
        })
        .collect()
}

/// Orchestrates plugin execution.
pub struct Pipeline {
    classifier: Box<dyn CommitClassifier>,
    formatter: Box<dyn ChangelogFormatter>,
    hooks: Vec<Box<dyn ReleaseHook>>,
}

impl Pipeline {
    /// Creates a new pipeline with the given plugins.
    #[must_use]
    pub fn new(
        classifier: Box<dyn CommitClassifier>,
        formatter: Box<dyn ChangelogFormatter>,
    ) -> Self {
        Self {
            classifier,
            formatter,
            hooks: Vec::new(),
        }
    }

    /// Adds a release hook. Hooks run in the order they were added.
    #[must_use]
    pub fn with_hook(mut self, hook: Box<dyn ReleaseHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Classifies commits using the configured classifier.
    pub fn classify(&self, commits: &[Commit]) -> Vec<Change> {
        classify_all(commits, self.classifier.as_ref())
    }

    /// Renders changes as a changelog section under `heading`.
    pub fn render(&self, heading: &str, changes: &[Change]) -> String {
        let release = Release::new(heading, changes.to_vec());
        self.formatter.format(&release, self.classifier.as_ref())
    }

    /// Returns a reference to the hooks.
    pub fn hooks(&self) -> &[Box<dyn ReleaseHook>] {
        &self.hooks
    }
}
