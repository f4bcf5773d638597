//! GitHub release hook.

use releaser_plugin::{Plugin, PluginResult, ReleaseContext, ReleaseHook};
use tracing::info;

use crate::{GhCli, rendered_notes};

/// Publishes the tag as a GitHub release with the changelog as notes.
#[derive(Debug)]
pub struct GithubReleaseHook {
    token: String,
    draft: bool,
    prerelease: bool,
}

impl GithubReleaseHook {
    /// Creates a new GitHub release hook authenticated with `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            draft: false,
            prerelease: false,
        }
    }

    /// Creates release as draft.
    #[must_use]
    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    /// Marks release as prerelease.
    #[must_use]
    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Returns whether this is a draft release.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.draft
    }

    /// Returns whether this is a prerelease.
    #[must_use]
    pub fn is_prerelease(&self) -> bool {
        self.prerelease
    }
}

impl Plugin for GithubReleaseHook {
    fn name(&self) -> &'static str {
        "github-release"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Creates a GitHub release with the changelog as notes"
    }
}

impl ReleaseHook for GithubReleaseHook {
    fn on_publish(&self, ctx: &mut ReleaseContext) -> PluginResult<()> {
        let notes = rendered_notes(ctx)?;

        if ctx.dry_run {
            info!(
                tag = %ctx.tag,
                draft = self.draft,
                prerelease = self.prerelease,
                "dry run: would create GitHub release"
            );
            return Ok(());
        }

        GhCli::new(&ctx.repo_path, &self.token).create_release(
            &ctx.tag,
            notes,
            self.draft,
            self.prerelease,
        )?;

        info!(tag = %ctx.tag, "created GitHub release");
        Ok(())
    }
}
