//! Alternating turn invariant: Player 1, Player 2, Player 1, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: players alternate turns, Player 1 first.
///
/// While in progress the player to move follows from the history length.
/// Once decided, the turn stays with whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first()
            && first.player != Player::Player1
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match (state.outcome(), history.last()) {
            (Some(_), Some(last)) => state.current_player() == last.player,
            (Some(_), None) => false,
            (None, _) => {
                let expected = if history.len() % 2 == 0 {
                    Player::Player1
                } else {
                    Player::Player2
                };
                state.current_player() == expected
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (Player 1, Player 2, ...)"
    }
}
