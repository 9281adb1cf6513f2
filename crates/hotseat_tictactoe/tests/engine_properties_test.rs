//! Contract-level properties of the engine across many games.

use hotseat_tictactoe::{
    Board, Coordinate, GameEngine, GameEvent, MoveResult, Occupant, Outcome, Phase, Player,
    Rejection,
};
use std::cell::Cell;
use std::rc::Rc;

/// Player 1 wins down column 0.
const P1_WINS: [(usize, usize); 5] = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)];
/// Player 2 wins across row 2.
const P2_WINS: [(usize, usize); 6] = [(0, 0), (2, 0), (0, 1), (2, 1), (1, 2), (2, 2)];
/// X O X / X O O / O X X
const TIE: [(usize, usize); 9] = [
    (0, 0),
    (1, 1),
    (0, 2),
    (0, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

fn play_game(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Outcome {
    for &(row, column) in moves {
        engine.attempt_move(row, column).unwrap();
    }
    engine.outcome().expect("scripted game ends")
}

#[test]
fn test_rejection_is_idempotent() {
    let mut engine = GameEngine::new();
    engine.attempt_move(2, 2).unwrap();
    let board = engine.board().clone();

    for _ in 0..2 {
        let result = engine.attempt_move(2, 2).unwrap();
        assert_eq!(result.rejection(), Some(Rejection::CellOccupied(Coordinate::new(2, 2).unwrap())));
        assert_eq!(engine.board(), &board);
    }
}

#[test]
fn test_turns_alternate_from_player1() {
    let mut engine = GameEngine::new();
    // Fills the board in an order that never completes a line before the end.
    for (index, &(row, column)) in TIE.iter().enumerate() {
        let expected = if index % 2 == 0 { Player::Player1 } else { Player::Player2 };
        match engine.attempt_move(row, column).unwrap() {
            MoveResult::Accepted { player, .. } => assert_eq!(player, expected),
            MoveResult::Rejected(rejection) => panic!("unexpected rejection: {rejection}"),
        }
        let at = Coordinate::new(row, column).unwrap();
        assert_eq!(engine.board().get(at), Occupant::Occupied(expected));
    }
}

#[test]
fn test_no_move_after_decision() {
    let mut engine = GameEngine::new();
    play_game(&mut engine, &P1_WINS);
    let frozen = engine.snapshot();

    for coordinate in Coordinate::ALL {
        let result = engine.play(coordinate).unwrap();
        assert_eq!(result, MoveResult::Rejected(Rejection::GameOver));
    }
    assert_eq!(engine.snapshot(), frozen);
    assert_eq!(engine.evaluate_outcome(), frozen.outcome());
}

#[test]
fn test_scores_track_decided_games() {
    let mut engine = GameEngine::new();
    let games: [&[(usize, usize)]; 5] = [&P1_WINS, &TIE, &P2_WINS, &P1_WINS, &TIE];

    let mut wins = 0;
    for (played, moves) in games.iter().enumerate() {
        let before = *engine.scores();
        let outcome = play_game(&mut engine, moves);
        let after = *engine.scores();

        match outcome {
            Outcome::Win(player) => {
                wins += 1;
                assert_eq!(after.score(player), before.score(player) + 1);
                assert_eq!(after.score(player.opponent()), before.score(player.opponent()));
            }
            Outcome::Tie => assert_eq!(after.total_wins(), before.total_wins()),
        }
        assert!((after.total_wins() as usize) <= played + 1);
        engine.reset_game();
    }

    assert_eq!(engine.scores().total_wins(), wins);
    assert_eq!(engine.scores().score(Player::Player1), 2);
    assert_eq!(engine.scores().score(Player::Player2), 1);
    assert_eq!(engine.scores().games_decided(), 5);
}

#[test]
fn test_reset_game_keeps_scores() {
    let mut engine = GameEngine::new();
    play_game(&mut engine, &P2_WINS);
    let scores = *engine.scores();

    engine.reset_game();

    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player(), Player::Player1);
    assert_eq!(engine.phase(), Phase::InProgress);
    assert_eq!(engine.outcome(), None);
    assert!(engine.winning_line().is_none());
    assert!(engine.history().is_empty());
    assert_eq!(engine.scores(), &scores);
}

#[test]
fn test_reset_all_zeroes_scores() {
    let mut engine = GameEngine::new();
    play_game(&mut engine, &P1_WINS);
    engine.reset_game();
    play_game(&mut engine, &P2_WINS);

    engine.reset_all();

    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.current_player(), Player::Player1);
    assert_eq!(engine.outcome(), None);
    assert_eq!(engine.scores().score(Player::Player1), 0);
    assert_eq!(engine.scores().score(Player::Player2), 0);
    assert_eq!(engine.scores().games_decided(), 0);
}

#[test]
fn test_reset_mid_game_allows_new_game() {
    let mut engine = GameEngine::new();
    engine.attempt_move(1, 1).unwrap();
    engine.reset_game();
    let result = engine.attempt_move(1, 1).unwrap();
    assert!(result.is_accepted());
    assert_eq!(engine.board().get(Coordinate::new(1, 1).unwrap()).player(), Some(Player::Player1));
}

#[test]
fn test_channel_and_callback_agree() {
    let mut engine = GameEngine::new();
    let receiver = engine.subscribe_channel();
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let id = engine.subscribe(move |_| counter.set(counter.get() + 1));

    play_game(&mut engine, &P1_WINS);
    engine.attempt_move(2, 2).unwrap(); // rejected
    engine.reset_game();

    let events: Vec<GameEvent> = receiver.try_iter().collect();
    assert_eq!(events.len(), P1_WINS.len() + 1);
    assert_eq!(count.get(), events.len());
    assert_eq!(events.last(), Some(&GameEvent::GameReset));
    assert!(matches!(
        events[P1_WINS.len() - 1],
        GameEvent::MoveAccepted {
            outcome: Some(Outcome::Win(Player::Player1)),
            ..
        }
    ));

    assert!(engine.unsubscribe(id));
    drop(receiver);
    engine.reset_all();
    assert_eq!(engine.observer_count(), 0);
    assert_eq!(count.get(), events.len());
}
