//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Marker after which new changelog sections are inserted.
pub const DEFAULT_ANCHOR: &str = "<!-- auto-releaser-start -->";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Classifier configuration.
    #[serde(default)]
    pub parser: ParserConfig,

    /// Changelog file configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Git configuration.
    #[serde(default)]
    pub git: GitConfig,

    /// GitHub release configuration.
    #[serde(default)]
    pub release: ReleaseConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        let required = [
            ("parser.name", &self.parser.name),
            ("changelog.path", &self.changelog.path),
            ("changelog.anchor", &self.changelog.anchor),
            ("git.main_branch", &self.git.main_branch),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{key} must not be empty")));
            }
        }

        Ok(())
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Classifier name (`conventional`, `regex` or `simple`).
    #[serde(default = "default_parser")]
    pub name: String,

    /// Pattern for the `regex` classifier.
    pub pattern: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            name: default_parser(),
            pattern: None,
        }
    }
}

fn default_parser() -> String {
    "conventional".to_string()
}

/// Changelog file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the repository root.
    #[serde(default = "default_changelog_path")]
    pub path: String,

    /// Marker after which new sections are inserted.
    #[serde(default = "default_anchor")]
    pub anchor: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            path: default_changelog_path(),
            anchor: default_anchor(),
        }
    }
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

fn default_anchor() -> String {
    DEFAULT_ANCHOR.to_string()
}

/// Git configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Branch the changelog update targets.
    #[serde(default = "default_main_branch")]
    pub main_branch: String,

    /// Push the changelog commit straight to the main branch, opening a pull
    /// request only when the push is rejected.
    #[serde(default)]
    pub direct_push: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            main_branch: default_main_branch(),
            direct_push: false,
        }
    }
}

fn default_main_branch() -> String {
    "main".to_string()
}

/// GitHub release configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Create release as draft.
    #[serde(default)]
    pub draft: bool,

    /// Mark release as prerelease.
    #[serde(default)]
    pub prerelease: bool,
}
