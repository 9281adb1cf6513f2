//! Engine error types.

use crate::action::Rejection;
use derive_more::{Display, Error};

/// Error returned when a caller breaks the engine's contract.
///
/// Illegal-but-well-formed moves are not errors; they come back as
/// [`MoveResult::Rejected`](crate::MoveResult::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Row or column outside `0..=2`.
    #[display("Coordinate ({}, {}) is outside the 3x3 board", row, column)]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// Which invariants failed.
        description: String,
    },

    /// A replayed move sequence contained an illegal move.
    #[display("Replay rejected move #{}: {}", index, rejection)]
    ReplayRejected {
        /// Zero-based index of the offending move.
        index: usize,
        /// Why the move was rejected.
        rejection: Rejection,
    },
}
