//! Command-line interface definitions.
//!
//! Defines the CLI structure for the nexus-portfolio server using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Crypto portfolio dashboard API server
#[derive(Parser, Debug)]
#[command(name = "nexus-portfolio")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (foreground)
    Serve(ServeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `nexus-portfolio check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for `serve`. Flags override the configuration file.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to the configuration file. Defaults apply when it is missing.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Port to listen on.
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Log level filter (e.g. `info`, `nexus_portfolio=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}
