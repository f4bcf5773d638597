//! Command implementations.

pub mod changelog;
pub mod pr;
pub mod release;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use releaser_core::{Pipeline, ReleaseManager, classifier_for};
use releaser_formatter_markdown::MarkdownFormatter;
use releaser_git::{GitCli, Repository};
use releaser_plugin::{ReleaseContext, ReleaseHook};
use tracing::info;

use crate::settings::{Credentials, Settings};

/// Arguments selecting the release and how its commits are classified.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Path to the git repository
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Tag being released (a `refs/tags/` prefix is stripped)
    #[arg(long, env = "GITHUB_REF")]
    pub tag: Option<String>,

    /// Commit classifier: conventional, regex or simple
    #[arg(long, env = "INPUT_ADAPTER")]
    pub adapter: Option<String>,

    /// Pattern for the regex classifier (group 1: category, group 2: content)
    #[arg(long, env = "INPUT_PATTERN")]
    pub pattern: Option<String>,
}

/// Arguments shared by the publishing commands.
#[derive(Debug, Clone, Args)]
pub struct PublishArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// GitHub token used for pushing and for the gh CLI
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Branch the changelog update targets (default: main)
    #[arg(long, env = "INPUT_MAIN_BRANCH")]
    pub main_branch: Option<String>,

    /// Changelog file path (default: CHANGELOG.md)
    #[arg(long, env = "INPUT_CHANGELOG_PATH")]
    pub changelog_path: Option<String>,

    /// Push the changelog commit to the main branch, opening a pull request
    /// only if the push is rejected
    #[arg(long)]
    pub direct_push: bool,

    /// Create the GitHub release as a draft
    #[arg(long)]
    pub draft: bool,

    /// Mark the GitHub release as a prerelease
    #[arg(long)]
    pub prerelease: bool,

    /// Log what would happen without pushing, publishing or writing files
    #[arg(short, long)]
    pub dry_run: bool,
}

/// Builds the classification pipeline selected by the settings.
fn build_pipeline(settings: &Settings) -> Result<Pipeline> {
    let classifier = classifier_for(&settings.adapter, settings.pattern.as_deref())
        .context("failed to create classifier")?;
    Ok(Pipeline::new(classifier, Box::new(MarkdownFormatter::new())))
}

/// Reads and renders the release range.
fn collect(settings: &Settings, pipeline: &Pipeline) -> Result<(ReleaseManager, ReleaseContext)> {
    let repo =
        Repository::discover(&settings.repo_path).context("failed to open git repository")?;
    let manager = ReleaseManager::new(repo, &settings.tag);
    let ctx = manager
        .collect(pipeline)
        .with_context(|| format!("failed to collect commits for {}", settings.tag))?;
    Ok((manager, ctx.dry_run(settings.dry_run)))
}

/// Authenticates `origin` and fetches the full history and tags.
fn prepare_checkout(settings: &Settings, credentials: &Credentials) -> Result<()> {
    if settings.dry_run {
        info!("dry run: leaving remote configuration and history untouched");
        return Ok(());
    }

    let git = GitCli::new(&settings.repo_path);
    git.set_remote_url(&credentials.repository, &credentials.token)
        .context("failed to set remote URL")?;
    git.fetch_unshallow().context("failed to fetch tags")?;
    Ok(())
}

/// Collects the release and runs `hook` on it.
fn publish_with(
    settings: &Settings,
    credentials: &Credentials,
    hook: Box<dyn ReleaseHook>,
) -> Result<()> {
    let pipeline = build_pipeline(settings)?.with_hook(hook);

    prepare_checkout(settings, credentials)?;
    let (manager, mut ctx) = collect(settings, &pipeline)?;

    info!(
        tag = %ctx.tag,
        previous = %ctx.previous_tag,
        changes = ctx.changes.len(),
        "generated release notes"
    );

    manager
        .publish(&pipeline, &mut ctx)
        .with_context(|| format!("failed to publish {}", ctx.tag))?;

    if settings.dry_run {
        println!("{}", ctx.notes());
    }
    Ok(())
}
