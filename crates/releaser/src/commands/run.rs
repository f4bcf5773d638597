//! Action entry point dispatching on the configured mode.

use anyhow::Result;
use clap::{Args, ValueEnum};
use tracing::info;

use super::PublishArgs;

/// What the action run does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Open a pull request updating the changelog file
    Pr,
    /// Publish a GitHub release
    Release,
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Mode to run
    #[arg(long, env = "INPUT_MODE", value_enum)]
    pub mode: Mode,

    #[command(flatten)]
    pub publish: PublishArgs,
}

/// Runs the run command.
pub fn run(args: RunArgs) -> Result<()> {
    info!(mode = ?args.mode, "starting auto-releaser");

    match args.mode {
        Mode::Pr => super::pr::run(&args.publish),
        Mode::Release => super::release::run(&args.publish),
    }
}
