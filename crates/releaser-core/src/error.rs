//! Core error types.

use thiserror::Error;

use crate::factory::AVAILABLE_CLASSIFIERS;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested classifier does not exist.
    #[error(
        "unknown adapter type: {0} (expected one of: {expected})",
        expected = AVAILABLE_CLASSIFIERS.join(", ")
    )]
    UnknownStrategy(String),

    /// The regex classifier was requested without a pattern.
    #[error("pattern is required for regex adapter")]
    MissingPattern,

    /// The regex classifier pattern does not compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] releaser_git::GitError),

    /// Plugin error.
    #[error("plugin error: {0}")]
    Plugin(#[from] releaser_plugin::PluginError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
