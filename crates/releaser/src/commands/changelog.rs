//! Changelog command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use releaser_commit::Change;
use releaser_hook_github::update_changelog_file;
use releaser_plugin::ReleaseContext;
use serde::Serialize;
use tracing::info;

use super::{SourceArgs, build_pipeline, collect};
use crate::settings::Settings;

/// Arguments for the changelog command.
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the classified changes and notes as JSON
    #[arg(long)]
    pub json: bool,

    /// Insert the notes into this changelog file instead of printing them
    #[arg(short, long, conflicts_with = "json")]
    pub output: Option<PathBuf>,
}

/// JSON view of a collected release.
#[derive(Debug, Serialize)]
struct ChangelogOutput<'a> {
    tag: &'a str,
    previous_tag: &'a str,
    changes: &'a [Change],
    changelog: &'a str,
}

impl<'a> From<&'a ReleaseContext> for ChangelogOutput<'a> {
    fn from(ctx: &'a ReleaseContext) -> Self {
        Self {
            tag: &ctx.tag,
            previous_tag: &ctx.previous_tag,
            changes: &ctx.changes,
            changelog: ctx.notes(),
        }
    }
}

/// Runs the changelog command.
pub fn run(args: &ChangelogArgs) -> Result<()> {
    let settings = Settings::from_source(&args.source)?;
    let pipeline = build_pipeline(&settings)?;
    let (_, ctx) = collect(&settings, &pipeline)?;

    if let Some(ref path) = args.output {
        update_changelog_file(path, ctx.notes(), &settings.anchor)
            .with_context(|| format!("failed to update {}", path.display()))?;
        info!(path = %path.display(), tag = %ctx.tag, "updated changelog file");
        return Ok(());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&ChangelogOutput::from(&ctx))
            .context("failed to serialize changelog")?;
        println!("{json}");
    } else {
        println!("{}", ctx.notes());
    }

    Ok(())
}
