//! Commit types for auto-releaser.
//!
//! This crate provides the two records that flow through the changelog pipeline:
//! - [`Commit`]: A commit as read from the version-control history
//! - [`Change`]: A classified changelog entry derived from one commit

mod change;
mod commit;

pub use change::Change;
pub use commit::Commit;
