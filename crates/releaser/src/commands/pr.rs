//! Pull-request command.

use anyhow::Result;
use releaser_hook_github::ChangelogPullRequestHook;

use super::{PublishArgs, publish_with};
use crate::settings::Settings;

/// Runs the pr command.
pub fn run(args: &PublishArgs) -> Result<()> {
    let (settings, credentials) = Settings::from_publish(args)?;

    let hook = ChangelogPullRequestHook::new(
        &credentials.token,
        &settings.main_branch,
        &settings.changelog_path,
        &settings.anchor,
    )
    .with_direct_push(settings.direct_push);
    hook.check_changelog_path()?;

    publish_with(&settings, &credentials, Box::new(hook))
}
