//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::coordinate::Coordinate;
use crate::outcome::{Outcome, Phase, WinningLine};
use crate::scores::Scoreboard;
use serde::{Deserialize, Serialize};

/// One of the two human players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Moves first in every game.
    #[default]
    #[display("Player 1")]
    Player1,
    /// Moves second.
    #[display("Player 2")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Board mark used when rendering as text.
    pub fn symbol(self) -> char {
        match self {
            Player::Player1 => 'X',
            Player::Player2 => 'O',
        }
    }
}

/// Contents of a single board cell.
///
/// Never holds a tie; see [`Outcome`] for game results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occupant {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a player.
    Occupied(Player),
}

impl Occupant {
    /// The occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(player) => Some(player),
        }
    }

    /// True for [`Occupant::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][column]`.
    cells: [[Occupant; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the occupant at a coordinate.
    pub fn get(&self, at: Coordinate) -> Occupant {
        self.cells[at.row()][at.column()]
    }

    /// Sets the occupant at a coordinate.
    pub(crate) fn set(&mut self, at: Coordinate, occupant: Occupant) {
        self.cells[at.row()][at.column()] = occupant;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, at: Coordinate) -> bool {
        self.get(at).is_empty()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Occupant; 3]; 3] {
        &self.cells
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.player() == Some(player))
            .count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::ALL
            .into_iter()
            .filter(|at| self.is_empty(*at))
            .collect()
    }
}

impl std::fmt::Display for Board {
    /// Empty cells show their 1-9 number so they can be typed back in.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                match cell {
                    Occupant::Empty => write!(f, "{}", row * 3 + column + 1)?,
                    Occupant::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
                if column < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Complete observable game state.
///
/// This is what the engine mutates and what observers, invariants and
/// serializers read. Only the engine can change it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move (meaningful while in progress).
    current_player: Player,
    /// In progress or decided.
    phase: Phase,
    /// Cells of the winning line, when the game was won.
    winning_line: Option<WinningLine>,
    /// Cumulative scores.
    scores: Scoreboard,
    /// Moves accepted since the last reset.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh state: empty board, Player 1 to move, zero scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Decided outcome, or `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Returns the winning line.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Returns the scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the move history of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Occupies a cell for `player` and records the move (unchecked).
    pub(crate) fn place(&mut self, at: Coordinate, player: Player) {
        self.board.set(at, Occupant::Occupied(player));
        self.history.push(Move::new(player, at));
    }

    /// Hands the turn to the opponent.
    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Ends the game and credits the winner (if any).
    pub(crate) fn decide(&mut self, outcome: Outcome, winning_line: Option<WinningLine>) {
        self.phase = Phase::Decided(outcome);
        self.winning_line = winning_line;
        self.scores.record(outcome);
    }

    /// Clears board, turn, outcome, line and history; scores survive.
    pub(crate) fn clear_game(&mut self) {
        self.board = Board::new();
        self.current_player = Player::Player1;
        self.phase = Phase::InProgress;
        self.winning_line = None;
        self.history.clear();
    }

    /// Zeroes every score counter.
    pub(crate) fn clear_scores(&mut self) {
        self.scores.clear();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }
}
