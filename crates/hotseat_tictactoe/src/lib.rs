//! Hot-seat tic-tac-toe engine.
//!
//! Two human players share one 3x3 board. The engine owns every piece of
//! mutable state (board, turn, outcome, winning line, scores) and exposes a
//! small synchronous API to whatever presentation layer drives it.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Occupant`], [`Board`], [`Coordinate`]
//! - **Rules**: pure evaluation of a board into an [`Outcome`] and [`WinningLine`]
//! - **Engine**: [`GameEngine`], the only mutator
//! - **Events**: synchronous change notification for observers
//! - **Invariants / contracts**: checked pre- and postconditions around moves
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameEngine, MoveResult, Outcome, Player};
//!
//! # fn main() -> Result<(), hotseat_tictactoe::EngineError> {
//! let mut engine = GameEngine::new();
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.attempt_move(row, column)?;
//! }
//! assert_eq!(engine.outcome(), Some(Outcome::Win(Player::Player1)));
//! assert_eq!(engine.scores().score(Player::Player1), 1);
//! assert!(matches!(engine.attempt_move(2, 2)?, MoveResult::Rejected(_)));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod coordinate;
mod engine;
mod error;
mod events;
pub mod invariants;
mod outcome;
pub mod rules;
mod scores;
mod types;

pub use action::{Move, MoveResult, Rejection};
pub use contracts::{CellIsEmpty, Contract, GameUndecided, LegalMove, MoveContract};
pub use coordinate::Coordinate;
pub use engine::GameEngine;
pub use error::EngineError;
pub use events::{GameEvent, SubscriptionId};
pub use outcome::{LineKind, Outcome, Phase, WinningLine};
pub use scores::Scoreboard;
pub use types::{Board, GameState, Occupant, Player};
