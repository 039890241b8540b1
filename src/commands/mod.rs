pub mod log;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Log work time to the issue named by the current branch")]
    Log,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        // Bare `jiratt` runs the log flow directly.
        match cli.command.unwrap_or(Commands::Log) {
            Commands::Log => log::cmd().await,
        }
    }
}
