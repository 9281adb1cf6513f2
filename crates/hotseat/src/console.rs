//! Line-oriented console front end.
//!
//! Holds no game logic: it reads commands, forwards them to the engine
//! and redraws whenever the engine reports a change.

use anyhow::{Context, Result};
use derive_more::{Display, Error};
use hotseat_tictactoe::{Coordinate, GameEngine, GameEvent, MoveResult, Outcome, Scoreboard};
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::mpsc;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  1-9            place your mark on that cell
  <row> <col>    place your mark by 0-based row and column
  reset          start a new game, keep scores
  reset-all      start a new game and zero scores
  board          show the board
  scores         show the scores
  help           show this message
  quit           leave";

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Move(Coordinate),
    /// Soft reset.
    Reset,
    /// Full reset.
    ResetAll,
    /// Redraw the board.
    Board,
    /// Print scores.
    Scores,
    /// Print help.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input that is neither a keyword nor a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {:?} (type `help` for commands)", input)]
pub struct ParseError {
    /// The offending line, trimmed.
    pub input: String,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let command = match line.to_lowercase().as_str() {
            "reset" | "r" => Command::Reset,
            "reset-all" | "resetall" => Command::ResetAll,
            "board" | "b" => Command::Board,
            "scores" | "s" => Command::Scores,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Move(Coordinate::parse(line).ok_or_else(|| ParseError {
                input: line.to_string(),
            })?),
        };
        Ok(command)
    }
}

/// Draws the board; winning cells are bracketed, empty cells show their number.
pub fn render_board(engine: &GameEngine) -> String {
    engine
        .board()
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, cell)| {
                    let mark = match cell.player() {
                        Some(player) => player.symbol().to_string(),
                        None => (row * 3 + column + 1).to_string(),
                    };
                    if engine.is_winning_cell(row, column) {
                        format!("[{mark}]")
                    } else {
                        format!(" {mark} ")
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// One line describing the turn or the result.
pub fn render_status(engine: &GameEngine) -> String {
    match engine.outcome() {
        Some(Outcome::Win(player)) => {
            format!("{player} ({}) wins! Type `reset` to play again.", player.symbol())
        }
        Some(Outcome::Tie) => "It's a tie! Type `reset` to play again.".to_string(),
        None => {
            let player = engine.current_player();
            format!("Current turn: {player} ({})", player.symbol())
        }
    }
}

/// One line with both players' wins and the tie count.
pub fn render_scores(scores: &Scoreboard) -> String {
    let mut parts: Vec<String> = scores
        .standings()
        .map(|(player, wins)| format!("{player} ({}): {wins}", player.symbol()))
        .collect();
    parts.push(format!("Ties: {}", scores.ties()));
    parts.join("   ")
}

/// Board, scores and status.
pub fn render(engine: &GameEngine) -> String {
    format!(
        "{}\n\n{}\n{}",
        render_board(engine),
        render_scores(engine.scores()),
        render_status(engine)
    )
}

/// Interactive session over any reader/writer pair.
pub struct Console<R, W> {
    engine: GameEngine,
    events: mpsc::Receiver<GameEvent>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an engine and subscribes to its changes.
    pub fn new(mut engine: GameEngine, input: R, output: W) -> Self {
        let events = engine.subscribe_channel();
        Self {
            engine,
            events,
            input,
            output,
        }
    }

    /// Runs until `quit` or end of input, returning the engine.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<GameEngine> {
        writeln!(self.output, "{}\n", render(&self.engine))?;
        writeln!(self.output, "Type `help` for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                info!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(error) => writeln!(self.output, "{error}")?,
            }
            self.redraw_on_change()?;
        }

        Ok(self.engine)
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        debug!(?command, "Handling command");
        match command {
            Command::Move(at) => {
                if let MoveResult::Rejected(rejection) = self.engine.play(at)? {
                    writeln!(self.output, "{rejection}")?;
                }
            }
            Command::Reset => self.engine.reset_game(),
            Command::ResetAll => self.engine.reset_all(),
            Command::Board => writeln!(self.output, "{}", render(&self.engine))?,
            Command::Scores => writeln!(self.output, "{}", render_scores(self.engine.scores()))?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Redraws once if the engine reported any change since the last call.
    fn redraw_on_change(&mut self) -> Result<()> {
        let changes = self.events.try_iter().count();
        if changes > 0 {
            debug!(changes, "Redrawing");
            writeln!(self.output, "{}", render(&self.engine))?;
        }
        Ok(())
    }
}
