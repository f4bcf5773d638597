//! Configuration management for auto-releaser.
//!
//! This crate handles loading the optional `releaser.toml` file. Values from
//! the command line and the CI environment are layered on top by the binary.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_or_default;
pub use schema::{
    ChangelogConfig, Config, DEFAULT_ANCHOR, GitConfig, ParserConfig, ReleaseConfig,
};
