//! Plugin traits.

pub mod classifier;
pub mod formatter;
pub mod hook;

/// Identity shared by classifiers, formatters and hooks.
///
/// Names are used in log output and recorded in
/// [`ReleaseContext::published`](crate::ReleaseContext::published).
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn version(&self) -> &'static str;

    /// One-line summary; empty unless overridden.
    fn description(&self) -> &'static str {
        ""
    }
}
