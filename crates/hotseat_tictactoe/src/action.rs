//! First-class move types for tic-tac-toe.
//!
//! A move is a domain event: who played where. What came of attempting
//! it is a [`MoveResult`], which is a normal value even when the move
//! was refused.

use crate::coordinate::Coordinate;
use crate::outcome::Outcome;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// An accepted move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the player took.
    pub coordinate: Coordinate,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinate.label())
    }
}

/// Why a well-formed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game already has an outcome.
    #[display("Game is already over")]
    GameOver,

    /// The target cell is taken.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinate),
}

/// What happened to an attempted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The mark was placed.
    Accepted {
        /// Who moved.
        player: Player,
        /// Where.
        coordinate: Coordinate,
        /// Set when this move ended the game.
        outcome: Option<Outcome>,
    },
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveResult {
    /// True if the mark was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    /// Outcome produced by this move, if it ended the game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveResult::Accepted { outcome, .. } => *outcome,
            MoveResult::Rejected(_) => None,
        }
    }

    /// The rejection reason, if refused.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveResult::Accepted { .. } => None,
            MoveResult::Rejected(rejection) => Some(*rejection),
        }
    }
}
