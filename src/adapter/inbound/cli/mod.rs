//! CLI module graph.

pub mod check;
pub mod command;
pub mod output;
pub mod serve;

use command::{CheckCommand, Cli, Commands};
use output::OutputConfig;

use crate::error::Result;

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(OutputConfig {
        json: cli.json,
        quiet: cli.quiet,
    });

    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Check(CheckCommand::Config(arg)) => check::config::execute_config(&arg.config),
    }
}
