//! Core library for auto-releaser.
//!
//! This crate provides the classification pipeline that turns a commit
//! range into release notes, the factory that selects a classifier by name,
//! and the release manager that drives the publishing hooks.

mod error;
mod factory;
mod pipeline;
mod release;

pub use error::{CoreError, CoreResult};
pub use factory::classifier_for;
pub use pipeline::{Pipeline, classify_all};
pub use release::ReleaseManager;
