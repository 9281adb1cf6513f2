//! Cumulative score keeping across games.

use crate::outcome::Outcome;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

/// Wins per player, plus a tie counter.
///
/// Survives soft resets; only a full reset zeroes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by Player 1.
    player1: u32,
    /// Games won by Player 2.
    player2: u32,
    /// Games that ended in a tie.
    ties: u32,
}

impl Scoreboard {
    /// Wins for `player`.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    /// Each player with their win count, Player 1 first.
    pub fn standings(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::iter().map(|player| (player, self.score(player)))
    }

    /// Sum of both players' wins.
    pub fn total_wins(&self) -> u32 {
        self.player1 + self.player2
    }

    /// Games decided since the last full reset.
    pub fn games_decided(&self) -> u32 {
        self.total_wins() + self.ties
    }

    /// Credits a decided game.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::Player1) => self.player1 += 1,
            Outcome::Win(Player::Player2) => self.player2 += 1,
            Outcome::Tie => self.ties += 1,
        }
        debug!(
            player1 = self.player1,
            player2 = self.player2,
            ties = self.ties,
            "Scores updated"
        );
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
