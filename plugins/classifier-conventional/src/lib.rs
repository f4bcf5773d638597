//! Conventional Commits classifier plugin.

use regex::Regex;
use releaser_commit::{Change, Commit};
use releaser_plugin::{CommitClassifier, Plugin, title_case};
use std::sync::LazyLock;

static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z0-9_]+)(?:\([^)\r\n]+\))?:[ \t]*(?P<content>.+)$")
        .expect("invalid regex")
});

/// Category assigned to well-formed commits with an unknown type.
pub const OTHER_CATEGORY: &str = "other";

/// Known commit types and their section titles.
const SECTION_TITLES: [(&str, &str); 8] = [
    ("feat", "Features"),
    ("fix", "Bug Fixes"),
    ("docs", "Documentation"),
    ("style", "Styles"),
    ("refactor", "Code Refactoring"),
    ("perf", "Performance Improvements"),
    ("test", "Tests"),
    ("chore", "Chores"),
];

/// Conventional Commits classifier.
///
/// Accepts `type(scope): description` messages. The scope is discarded and
/// types outside the known set are filed under [`OTHER_CATEGORY`].
pub struct ConventionalClassifier;

impl ConventionalClassifier {
    /// Creates a new conventional classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn known_title(category: &str) -> Option<&'static str> {
        SECTION_TITLES
            .iter()
            .find(|(key, _)| *key == category)
            .map(|(_, title)| *title)
    }
}

impl Default for ConventionalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ConventionalClassifier {
    fn name(&self) -> &'static str {
        "conventional"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Classifies Conventional Commits by type"
    }
}

impl CommitClassifier for ConventionalClassifier {
    fn classify(&self, commit: &Commit) -> Option<Change> {
        let message = commit.message.trim();
        let captures = CONVENTIONAL_RE.captures(message)?;

        let commit_type = captures.name("type")?.as_str();
        let content = captures.name("content")?.as_str();

        let category = if Self::known_title(commit_type).is_some() {
            commit_type
        } else {
            OTHER_CATEGORY
        };

        let change = Change::new(category, content);
        change.is_renderable().then_some(change)
    }

    fn title_for(&self, category: &str) -> String {
        Self::known_title(category).map_or_else(|| title_case(category), str::to_string)
    }
}
