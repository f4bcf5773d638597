//! Release hook trait.

use super::Plugin;
use crate::{PluginResult, ReleaseContext};

/// Publishes the rendered release notes somewhere.
///
/// Hooks run in registration order once the changelog has been rendered
/// into [`ReleaseContext::changelog`]. A hook must not mutate anything
/// outside the process when [`ReleaseContext::dry_run`] is set.
pub trait ReleaseHook: Plugin {
    /// Called once the changelog is ready.
    ///
    /// # Errors
    ///
    /// Returns an error if publishing fails (e.g., a rejected push).
    fn on_publish(&self, ctx: &mut ReleaseContext) -> PluginResult<()>;
}
