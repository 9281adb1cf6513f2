//! The game engine: sole owner and mutator of game state.

use crate::action::{Move, MoveResult, Rejection};
use crate::contracts::{Contract, MoveContract};
use crate::coordinate::Coordinate;
use crate::error::EngineError;
use crate::events::{GameEvent, Observers, SubscriptionId};
use crate::outcome::{Outcome, Phase, WinningLine};
use crate::rules;
use crate::scores::Scoreboard;
use crate::types::{Board, GameState, Player};
use std::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Holds one session's state: the current game plus cumulative scores.
/// All operations are synchronous; observers are called before the
/// mutating method returns. The engine does no locking of its own.
#[derive(Debug, Default)]
pub struct GameEngine {
    state: GameState,
    observers: Observers,
}

impl GameEngine {
    /// Creates an engine with an empty board, Player 1 to move and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an engine by playing `moves` in order on a fresh game.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReplayRejected`] at the first move that
    /// would be rejected.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Coordinate]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for (index, at) in moves.iter().enumerate() {
            if let MoveResult::Rejected(rejection) = engine.play(*at)? {
                warn!(index, %at, %rejection, "Replay stopped on illegal move");
                return Err(EngineError::ReplayRejected { index, rejection });
            }
        }
        Ok(engine)
    }

    /// Attempts to place the current player's mark at `(row, column)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if either index is
    /// outside `0..=2`. An occupied cell or a finished game is not an
    /// error: the call returns [`MoveResult::Rejected`] and changes nothing.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn attempt_move(&mut self, row: usize, column: usize) -> Result<MoveResult, EngineError> {
        let at = Coordinate::new(row, column).inspect_err(|error| {
            warn!(%error, "Move outside the board");
        })?;
        self.play(at)
    }

    /// Places the current player's mark at an already validated coordinate.
    ///
    /// # Errors
    ///
    /// Only in debug builds, and only if a postcondition fails.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play(&mut self, at: Coordinate) -> Result<MoveResult, EngineError> {
        if let Err(rejection) = MoveContract::pre(&self.state, &at) {
            debug!(%rejection, "Move rejected");
            return Ok(MoveResult::Rejected(rejection));
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.current_player();
        self.state.place(at, player);

        let evaluation = rules::evaluate(self.state.board());
        match evaluation.outcome {
            Some(outcome) => {
                self.state.decide(outcome, evaluation.winning_line);
                info!(%outcome, "Game decided");
            }
            None => self.state.pass_turn(),
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &self.state)?;

        let outcome = evaluation.outcome;
        debug!(%at, ?outcome, "Move accepted");
        self.observers.notify(&GameEvent::MoveAccepted {
            player,
            coordinate: at,
            outcome,
        });

        Ok(MoveResult::Accepted {
            player,
            coordinate: at,
            outcome,
        })
    }

    /// Evaluates the current board without changing anything.
    ///
    /// Scans rows, then columns, then diagonals; a full board with no
    /// line is a tie.
    #[instrument(skip(self))]
    pub fn evaluate_outcome(&self) -> Option<Outcome> {
        rules::evaluate(self.state.board()).outcome
    }

    /// Starts a new game, keeping scores.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.state.clear_game();
        info!("Game reset");
        self.observers.notify(&GameEvent::GameReset);
    }

    /// Starts a new game and zeroes all scores.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.state.clear_game();
        self.state.clear_scores();
        info!("Game and scores reset");
        self.observers.notify(&GameEvent::AllReset);
    }

    /// True iff `(row, column)` is part of the current winning line.
    pub fn is_winning_cell(&self, row: usize, column: usize) -> bool {
        match (Coordinate::new(row, column), self.state.winning_line()) {
            (Ok(at), Some(line)) => line.contains(at),
            _ => false,
        }
    }

    /// Cells a move could currently go to; empty once decided.
    pub fn valid_moves(&self) -> Vec<Coordinate> {
        if self.state.phase().is_decided() {
            return Vec::new();
        }
        self.state.board().empty_cells()
    }

    /// Registers a callback run after every successful mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.observers.subscribe(Box::new(callback))
    }

    /// Registers a channel that receives every successful mutation.
    ///
    /// Dropping the receiver unsubscribes it.
    pub fn subscribe_channel(&mut self) -> mpsc::Receiver<GameEvent> {
        self.observers.subscribe_channel()
    }

    /// Removes a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns the full state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the full state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the decided outcome.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns the winning line.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.state.winning_line()
    }

    /// Returns the scores.
    pub fn scores(&self) -> &Scoreboard {
        self.state.scores()
    }

    /// Returns the moves of the current game.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Reason a move at `at` would be refused right now, if any.
    pub fn check_move(&self, at: Coordinate) -> Option<Rejection> {
        MoveContract::pre(&self.state, &at).err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Occupant;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_engine_is_fresh() {
        let engine = GameEngine::new();
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.current_player(), Player::Player1);
        assert_eq!(engine.phase(), Phase::InProgress);
        assert_eq!(engine.outcome(), None);
        assert_eq!(engine.scores(), &Scoreboard::default());
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut engine = GameEngine::new();
        let result = engine.attempt_move(2, 1).unwrap();
        assert_eq!(
            result,
            MoveResult::Accepted {
                player: Player::Player1,
                coordinate: Coordinate::new(2, 1).unwrap(),
                outcome: None,
            }
        );
        assert_eq!(
            engine.board().get(Coordinate::new(2, 1).unwrap()),
            Occupant::Occupied(Player::Player1)
        );
        assert_eq!(engine.current_player(), Player::Player2);
    }

    #[test]
    fn test_invalid_coordinate_is_error() {
        let mut engine = GameEngine::new();
        let events = engine.subscribe_channel();
        assert_eq!(
            engine.attempt_move(0, 3),
            Err(EngineError::InvalidCoordinate { row: 0, column: 3 })
        );
        assert_eq!(engine.board(), &Board::new());
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_observers_see_each_mutation_once() {
        let mut engine = GameEngine::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        engine.subscribe(move |event| sink.borrow_mut().push(*event));

        engine.attempt_move(1, 1).unwrap();
        engine.attempt_move(1, 1).unwrap(); // rejected, silent
        engine.reset_game();
        engine.reset_all();

        assert_eq!(
            *seen.borrow(),
            vec![
                GameEvent::MoveAccepted {
                    player: Player::Player1,
                    coordinate: Coordinate::new(1, 1).unwrap(),
                    outcome: None,
                },
                GameEvent::GameReset,
                GameEvent::AllReset,
            ]
        );
    }

    #[test]
    fn test_check_move_matches_attempt() {
        let mut engine = GameEngine::new();
        let center = Coordinate::new(1, 1).unwrap();
        assert_eq!(engine.check_move(center), None);
        engine.play(center).unwrap();
        assert_eq!(engine.check_move(center), Some(Rejection::CellOccupied(center)));
    }

    #[test]
    fn test_valid_moves_empty_after_decision() {
        let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]
            .map(|(r, c)| Coordinate::new(r, c).unwrap());
        let engine = GameEngine::replay(&moves).unwrap();
        assert!(engine.valid_moves().is_empty());
        assert_eq!(engine.board().empty_cells().len(), 4);
    }
}
