//! Command-line interface for hotseat.

use clap::{Parser, Subcommand};

/// Hot-seat tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe with running scores", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a scripted list of moves to a fresh game and print the result
    Replay {
        /// Moves in order, as `row,col` (0-based) or cell numbers 1-9
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
