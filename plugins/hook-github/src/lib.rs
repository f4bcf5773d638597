//! GitHub hooks plugin.
//!
//! Publishes a tagged release through the `gh` CLI, or commits the rendered
//! section into the changelog file and opens a pull request for it.

mod changelog_file;
mod gh;
mod pull_request;
mod release;

pub use changelog_file::{insert_changelog, update_changelog_file};
pub use gh::GhCli;
pub use pull_request::ChangelogPullRequestHook;
pub use release::GithubReleaseHook;

use releaser_git::GitError;
use releaser_plugin::{PluginError, PluginResult, ReleaseContext};

/// Converts a git failure into the plugin error reported by a hook.
fn git_error(err: GitError) -> PluginError {
    match err {
        GitError::CommandFailed { command, stderr } => {
            PluginError::CommandFailed { command, stderr }
        }
        GitError::Io(err) => PluginError::Io(err),
        other => PluginError::ExecutionFailed(other.to_string()),
    }
}

/// Returns the rendered changelog a hook publishes.
fn rendered_notes(ctx: &ReleaseContext) -> PluginResult<&str> {
    ctx.changelog
        .as_deref()
        .ok_or_else(|| PluginError::ExecutionFailed("changelog has not been rendered".into()))
}
