//! Errors from reading `releaser.toml`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No file at the given path.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// The file parsed but a value is unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
