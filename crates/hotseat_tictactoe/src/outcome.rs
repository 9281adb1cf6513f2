//! Game outcomes, phases and winning lines.

use crate::coordinate::Coordinate;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Win(Player),
    /// Board filled without a line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// Game over; only a reset leaves this phase.
    Decided(Outcome),
}

impl Phase {
    /// Outcome once decided.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::InProgress => None,
            Phase::Decided(outcome) => Some(outcome),
        }
    }

    /// True once an outcome exists.
    pub fn is_decided(self) -> bool {
        matches!(self, Phase::Decided(_))
    }
}

/// Which of the 8 lines a winning line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A full row (0-2).
    Row(u8),
    /// A full column (0-2).
    Column(u8),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// The three cells that decided a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    cells: [Coordinate; 3],
}

impl WinningLine {
    pub(crate) const fn new(kind: LineKind, cells: [Coordinate; 3]) -> Self {
        Self { kind, cells }
    }

    /// Row, column or diagonal.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three cells.
    pub fn cells(&self) -> &[Coordinate; 3] {
        &self.cells
    }

    /// True if `at` is one of the three cells.
    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells.contains(&at)
    }
}
