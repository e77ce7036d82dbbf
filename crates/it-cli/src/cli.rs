//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Iron Test - administration commands for an Iron Test installation
#[derive(Parser, Debug)]
#[command(name = "irontest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upgrade Iron Test
    Upgrade(UpgradeArgs),
}

/// Arguments for the upgrade command
#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// Home directory of the Iron Test instance to be upgraded
    #[arg(value_name = "IronTestHome")]
    pub iron_test_home: PathBuf,

    /// Override the system database URL from config.yml
    #[arg(long, env = "IRONTEST_SYSTEM_DB_URL")]
    pub database_url: Option<String>,

    /// Show the upgrade steps that would run without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
