//! Release orchestration.

use releaser_git::Repository;
use releaser_plugin::ReleaseContext;
use tracing::{debug, info};

use crate::{CoreResult, Pipeline};

/// Manages the release process for one tag.
pub struct ReleaseManager {
    repo: Repository,
    tag: String,
}

impl ReleaseManager {
    /// Creates a new release manager.
    #[must_use]
    pub fn new(repo: Repository, tag: impl Into<String>) -> Self {
        Self {
            repo,
            tag: tag.into(),
        }
    }

    /// Returns where the release range starts: the nearest earlier tag, or
    /// the root commit when the tag is the first one.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag cannot be resolved.
    pub fn previous_tag(&self) -> CoreResult<String> {
        Ok(self.repo.previous_tag(&self.tag)?)
    }

    /// Reads, classifies and renders the commits of the release.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    pub fn collect(&self, pipeline: &Pipeline) -> CoreResult<ReleaseContext> {
        let previous_tag = self.previous_tag()?;
        let commits = self.repo.commits_between(&previous_tag, &self.tag)?;
        info!(
            tag = %self.tag,
            previous = %previous_tag,
            count = commits.len(),
            "found commits for release"
        );

        let changes = pipeline.classify(&commits);
        debug!(
            classified = changes.len(),
            skipped = commits.len() - changes.len(),
            "classified commits"
        );

        let changelog = pipeline.render(&self.tag, &changes);
        debug!(changelog_len = changelog.len(), "generated changelog");

        Ok(
            ReleaseContext::new(self.repo.path(), &self.tag, previous_tag, changes)
                .with_changelog(changelog),
        )
    }

    /// Runs every hook of the pipeline in order.
    ///
    /// The first failing hook aborts the run; hooks after it do not run.
    ///
    /// # Errors
    ///
    /// Returns the error of the first hook that fails.
    pub fn publish(&self, pipeline: &Pipeline, ctx: &mut ReleaseContext) -> CoreResult<()> {
        for hook in pipeline.hooks() {
            debug!(hook = hook.name(), dry_run = ctx.dry_run, "running publish hook");
            hook.on_publish(ctx)?;
            ctx.published.push(hook.name().to_string());
        }

        info!(tag = %self.tag, hooks = ctx.published.len(), "release completed");
        Ok(())
    }
}
