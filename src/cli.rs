//! Command-line interface for ticbot.

use clap::{Parser, Subcommand};

/// Ticbot - tic-tac-toe against a random bot
#[derive(Parser, Debug)]
#[command(name = "ticbot")]
#[command(about = "Tic-tac-toe core with a terminal front-end", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal, driving the core through the same event
    /// contract a chat front-end uses
    Play {
        /// Path to a TOML config file; environment variables are used
        /// when omitted
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
