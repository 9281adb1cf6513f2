//! Contract-based validation for moves.
//!
//! Contracts pair a precondition, which decides whether a move is legal
//! right now, with a postcondition relating the state before and after
//! the move.

use crate::action::Rejection;
use crate::coordinate::Coordinate;
use crate::error::EngineError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::outcome::Outcome;
use crate::types::GameState;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    ///
    /// A failed precondition is a normal refusal, not an error.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// Precondition: no outcome has been decided.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects with [`Rejection::GameOver`] once decided.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        if state.phase().is_decided() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`Rejection::CellOccupied`] if taken.
    #[instrument(skip(state))]
    pub fn check(at: Coordinate, state: &GameState) -> Result<(), Rejection> {
        if state.board().is_empty(at) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(at))
        }
    }
}

/// Composite precondition: game undecided and cell empty, checked in
/// that order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(at: Coordinate, state: &GameState) -> Result<(), Rejection> {
        GameUndecided::check(state)?;
        CellIsEmpty::check(at, state)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Postconditions:
/// - exactly one new move, by the player who was to move, on a cell that was empty
/// - turn flipped iff the game is still in progress
/// - scores changed only if the game was just decided, by one, for the right counter
/// - every [`EngineInvariants`] member holds
pub struct MoveContract;

impl Contract<GameState, Coordinate> for MoveContract {
    fn pre(state: &GameState, at: &Coordinate) -> Result<(), Rejection> {
        LegalMove::check(*at, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), EngineError> {
        let mut failures = Vec::new();

        let added = after.history().len().checked_sub(before.history().len());
        match (added, after.history().last()) {
            (Some(1), Some(last)) => {
                if last.player != before.current_player() {
                    failures.push("Move made by the wrong player".to_string());
                }
                if !before.board().is_empty(last.coordinate) {
                    failures.push("Move placed on an occupied cell".to_string());
                }
            }
            _ => failures.push("History did not grow by exactly one move".to_string()),
        }

        let expected_turn = if after.phase().is_decided() {
            before.current_player()
        } else {
            before.current_player().opponent()
        };
        if after.current_player() != expected_turn {
            failures.push("Turn did not follow the move".to_string());
        }

        let mut expected_scores = *before.scores();
        if let Some(outcome) = after.outcome() {
            expected_scores.record(outcome);
        }
        if *after.scores() != expected_scores {
            failures.push(format!(
                "Scores changed unexpectedly for outcome {}",
                after.outcome().map_or_else(|| "none".to_string(), |o: Outcome| o.to_string())
            ));
        }

        if let Err(violations) = EngineInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            warn!(?failures, "Move postcondition failed");
            Err(EngineError::InvariantViolation {
                description: format!("Postcondition failed: {}", failures.join("; ")),
            })
        }
    }
}
