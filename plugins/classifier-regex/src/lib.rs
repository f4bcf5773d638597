//! Custom regex classifier plugin.

use regex::Regex;
use releaser_commit::{Change, Commit};
use releaser_plugin::{CommitClassifier, Plugin, title_case};

/// Classifier driven by a caller-supplied pattern.
///
/// The pattern must have two capturing groups: group 1 is the category and
/// group 2 the content. It is applied to the full, untrimmed message.
pub struct RegexClassifier {
    regex: Regex,
}

impl RegexClassifier {
    /// Creates a new regex classifier from a pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self { regex })
    }

    /// Returns true if the pattern defines the two groups classification needs.
    ///
    /// A classifier built from a pattern with fewer groups rejects every commit.
    fn has_required_groups(&self) -> bool {
        self.regex.captures_len() >= 3
    }
}

impl Plugin for RegexClassifier {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Classifies commits using a custom regex pattern"
    }
}

impl CommitClassifier for RegexClassifier {
    fn classify(&self, commit: &Commit) -> Option<Change> {
        if !self.has_required_groups() {
            return None;
        }

        let captures = self.regex.captures(&commit.message)?;
        let category = captures.get(1).map_or("", |m| m.as_str());
        let content = captures.get(2).map_or("", |m| m.as_str());

        let change = Change::new(category, content);
        change.is_renderable().then_some(change)
    }

    fn title_for(&self, category: &str) -> String {
        title_case(category)
    }
}
