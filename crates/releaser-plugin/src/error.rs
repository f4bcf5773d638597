//! Errors raised by classifiers, formatters and release hooks.

use thiserror::Error;

/// Failure inside a plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The plugin could not do its work with the context it was given.
    #[error("plugin execution failed: {0}")]
    ExecutionFailed(String),

    /// The plugin was constructed with unusable settings.
    #[error("plugin configuration error: {0}")]
    ConfigError(String),

    /// A `git` or `gh` process could not be spawned or exited non-zero.
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PluginResult<T> = Result<T, PluginError>;
