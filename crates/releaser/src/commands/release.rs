//! Release command.

use anyhow::Result;
use releaser_hook_github::GithubReleaseHook;

use super::{PublishArgs, publish_with};
use crate::settings::Settings;

/// Runs the release command.
pub fn run(args: &PublishArgs) -> Result<()> {
    let (settings, credentials) = Settings::from_publish(args)?;

    let hook = GithubReleaseHook::new(&credentials.token)
        .with_draft(settings.draft)
        .with_prerelease(settings.prerelease);

    publish_with(&settings, &credentials, Box::new(hook))
}
