//! Git layer for auto-releaser.
//!
//! This crate provides Git operations:
//! - [`Repository`]: history reads (tags, commit ranges) through libgit2
//! - [`GitCli`]: branch, commit and remote operations through the `git` binary

mod cli;
mod error;
mod repository;

pub use cli::GitCli;
pub use error::{GitError, GitResult};
pub use repository::Repository;
