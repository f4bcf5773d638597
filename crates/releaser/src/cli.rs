//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Generate changelogs from tagged commit ranges and publish GitHub releases.
#[derive(Debug, Parser)]
#[command(name = "releaser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the mode selected by --mode or INPUT_MODE (GitHub Action entry point)
    Run(commands::run::RunArgs),

    /// Open a pull request adding the release notes to the changelog file
    Pr(commands::PublishArgs),

    /// Publish a GitHub release with the release notes
    Release(commands::PublishArgs),

    /// Print the release notes for a tag
    Changelog(commands::changelog::ChangelogArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args) => commands::run::run(args),
            Commands::Pr(args) => commands::pr::run(&args),
            Commands::Release(args) => commands::release::run(&args),
            Commands::Changelog(args) => commands::changelog::run(&args),
        }
    }
}
