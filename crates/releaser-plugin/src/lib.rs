//! Plugin system for auto-releaser.
//!
//! This crate provides the plugin traits and shared infrastructure:
//! - [`Plugin`]: Base trait for all plugins
//! - [`CommitClassifier`]: Turns a commit into at most one changelog entry
//! - [`ChangelogFormatter`]: Renders classified changes
//! - [`ReleaseHook`]: Publishes the rendered notes

mod context;
mod error;
mod title;
mod traits;

pub use context::ReleaseContext;
pub use error::{PluginError, PluginResult};
pub use title::title_case;
pub use traits::Plugin;
pub use traits::classifier::CommitClassifier;
pub use traits::formatter::{ChangelogFormatter, Release};
pub use traits::hook::ReleaseHook;
