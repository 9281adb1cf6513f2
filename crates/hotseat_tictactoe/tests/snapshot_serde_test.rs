//! Serialized form of engine state.

use hotseat_tictactoe::{Coordinate, GameEngine, GameState, Outcome, Player};

#[test]
fn test_snapshot_serializes_observable_state() {
    let mut engine = GameEngine::new();
    for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        engine.attempt_move(row, column).unwrap();
    }

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["current_player"], "Player1");
    assert_eq!(json["phase"]["Decided"]["Win"], "Player1");
    assert_eq!(json["scores"]["player1"], 1);
    assert_eq!(json["winning_line"]["cells"][2], serde_json::json!([0, 2]));
    assert_eq!(json["history"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_snapshot_round_trips() {
    let mut engine = GameEngine::new();
    engine.attempt_move(2, 0).unwrap();

    let text = serde_json::to_string(&engine.snapshot()).unwrap();
    let restored: GameState = serde_json::from_str(&text).unwrap();
    assert_eq!(&restored, engine.state());
    assert_eq!(restored.current_player(), Player::Player2);
    assert_eq!(restored.outcome(), None::<Outcome>);
}

#[test]
fn test_coordinate_deserialization_validates_range() {
    assert_eq!(
        serde_json::from_str::<Coordinate>("[1, 2]").unwrap(),
        Coordinate::new(1, 2).unwrap()
    );
    assert!(serde_json::from_str::<Coordinate>("[3, 0]").is_err());
}
