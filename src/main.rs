//! Ticbot - terminal stand-in for a chat front-end.
//!
//! Drives the session controller through the same inbound-event and
//! rendering contract a chat transport uses: start commands, two-digit
//! move payloads, and acknowledgements after a finished game.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::BufRead;
use std::path::PathBuf;
use ticbot::{BotConfig, Coord, MovePicker, Phase, RandomPicker, SessionManager, TurnReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => play(config),
    }
}

/// Run an interactive game loop on stdin/stdout.
fn play(config_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => BotConfig::from_file(&path)?,
        None => BotConfig::from_env(),
    };

    let picker: Box<dyn MovePicker> = match config.seed() {
        Some(seed) => Box::new(RandomPicker::seeded(*seed)),
        None => Box::new(RandomPicker::new()),
    };
    let manager = SessionManager::with_picker(picker);

    info!("Starting terminal game");
    let session = "terminal";
    print_report(&manager.start_game(session));
    println!("Enter a move as two digits (row then column, e.g. 12), `start` to restart, `quit` to leave.");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "start" => print_report(&manager.start_game(session)),
            _ => match manager.phase(session) {
                Some(Phase::InProgress) => {
                    let Some(coord) = Coord::from_callback(input) else {
                        println!("Moves are two digits 0-2, e.g. 12 for row 1, column 2.");
                        continue;
                    };
                    match manager.submit_human_move(session, coord) {
                        Ok(report) => print_report(&report),
                        Err(err) => println!("{err}"),
                    }
                }
                // A finished game accepts only acknowledgement or a
                // fresh start; anything else ends the conversation.
                _ => {
                    let _ = manager.acknowledge_finish(session);
                    println!("Game over. Type `start` for a new game or `quit` to leave.");
                }
            },
        }
    }

    Ok(())
}

fn print_report(report: &TurnReport) {
    println!("{}", report.grid().display());
    println!("{}", report.outcome());
}
