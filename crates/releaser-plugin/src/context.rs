//! Release context shared between hooks.

use std::path::PathBuf;

use releaser_commit::Change;

/// Shared state passed to all hooks during a run.
#[derive(Debug)]
pub struct ReleaseContext {
    /// Path to the repository root.
    pub repo_path: PathBuf,

    /// The tag being released.
    pub tag: String,

    /// The tag (or root commit) the release range starts from.
    pub previous_tag: String,

    /// All classified changes in the range.
    pub changes: Vec<Change>,

    /// The rendered changelog (populated after the formatter runs).
    pub changelog: Option<String>,

    /// Whether this is a dry run (no actual changes).
    pub dry_run: bool,

    /// Names of the hooks that published successfully, in order.
    pub published: Vec<String>,
}

impl ReleaseContext {
    /// Creates a new release context.
    #[must_use]
    pub fn new(
        repo_path: impl Into<PathBuf>,
        tag: impl Into<String>,
        previous_tag: impl Into<String>,
        changes: Vec<Change>,
    ) -> Self {
        Self {
            repo_path: repo_path.into(),
            tag: tag.into(),
            previous_tag: previous_tag.into(),
            changes,
            changelog: None,
            dry_run: false,
            published: Vec::new(),
        }
    }

    /// Sets the dry run flag.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the rendered changelog.
    #[must_use]
    pub fn with_changelog(mut self, changelog: impl Into<String>) -> Self {
        self.changelog = Some(changelog.into());
        self
    }

    /// Returns the rendered changelog, or an empty string if not rendered yet.
    #[must_use]
    pub fn notes(&self) -> &str {
        self.changelog.as_deref().unwrap_or_default()
    }
}
