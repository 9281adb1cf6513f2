//! Hotseat - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use console::Console;
use hotseat_tictactoe::{Coordinate, GameEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Interactive game on stdin/stdout.
#[instrument]
fn run_play() -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let engine = Console::new(GameEngine::new(), stdin.lock(), stdout.lock()).run()?;
    info!(scores = ?engine.scores(), "Session finished");
    Ok(())
}

/// Plays `moves` on a fresh engine and prints the final state.
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    let coordinates = moves
        .iter()
        .map(|token| {
            Coordinate::parse(token).with_context(|| format!("Invalid move `{token}`"))
        })
        .collect::<Result<Vec<_>>>()?;

    let engine = GameEngine::replay(&coordinates)?;

    if json {
        let snapshot = serde_json::to_string_pretty(&engine.snapshot())
            .context("Failed to serialize game state")?;
        println!("{snapshot}");
    } else {
        println!("{}", console::render(&engine));
    }
    Ok(())
}
