//! Outcome consistency invariant: recorded result matches the board.

use super::Invariant;
use crate::rules;
use crate::types::GameState;

/// Invariant: phase and winning line agree with a fresh board scan.
///
/// A recorded winning line must be three cells held by the winner, and
/// ties never carry a line.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let evaluation = rules::evaluate(state.board());
        if evaluation.outcome != state.outcome() {
            return false;
        }
        if evaluation.winning_line.as_ref() != state.winning_line() {
            return false;
        }

        match (state.outcome().and_then(|o| o.winner()), state.winning_line()) {
            (Some(winner), Some(line)) => line
                .cells()
                .iter()
                .all(|cell| state.board().get(*cell).player() == Some(winner)),
            (None, None) => true,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Outcome and winning line match the board"
    }
}
