//! Markdown changelog formatter plugin.

use std::collections::BTreeMap;
use std::fmt::Write;

use releaser_commit::Change;
use releaser_plugin::{ChangelogFormatter, CommitClassifier, Plugin, Release};

/// Body rendered when a release has no changes.
pub const NO_CHANGES: &str = "No notable changes.";

/// Markdown changelog formatter.
///
/// Renders one `##` section per release with a `###` subsection per
/// category. Categories and the bullets inside them are sorted by byte
/// order so the output does not depend on commit order.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Groups change contents by category, ordered by category key.
    fn group_by_category(changes: &[Change]) -> BTreeMap<&str, Vec<&str>> {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

        for change in changes {
            groups
                .entry(change.category.as_str())
                .or_default()
                .push(change.content.as_str());
        }

        groups
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for MarkdownFormatter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Renders grouped, sorted Markdown release notes"
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    fn format(&self, release: &Release, classifier: &dyn CommitClassifier) -> String {
        let mut output = String::new();
        _ = writeln!(output, "## {}\n", release.heading);

        if release.is_empty() {
            output.push_str(NO_CHANGES);
            return output.trim().to_string();
        }

        for (category, mut items) in Self::group_by_category(&release.changes) {
            _ = writeln!(output, "### {}\n", classifier.title_for(category));

            items.sort_unstable();
            for item in items {
                _ = writeln!(output, "- {item}");
            }

            output.push('\n');
        }

        output.trim().to_string()
    }
}

/// Renders `changes` under `heading` with the default Markdown layout.
#[must_use]
pub fn format_changelog(
    heading: &str,
    changes: &[Change],
    classifier: &dyn CommitClassifier,
) -> String {
    let release = Release::new(heading, changes.to_vec());
    MarkdownFormatter::new().format(&release, classifier)
}
