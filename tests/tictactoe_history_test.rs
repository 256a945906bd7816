//! Tests for the move history log and time travel.

use strictly_rewind::invariants::{Invariant, MonotonicHistoryInvariant};
use strictly_rewind::{
    GameBoard, HistoryError, HistoryMode, MoveHistoryLog, Player, Position, Square,
};

const MOVES: [usize; 6] = [4, 0, 8, 2, 1, 7];

#[test]
fn test_view_then_restore_matches_snapshot_after_each_move() {
    let mut live = GameBoard::new(Player::X);
    let mut snapshots = vec![live.state().clone()];
    for index in MOVES {
        live.record_move(index).expect("valid index");
        snapshots.push(live.state().clone());
    }

    let mut board = live.clone();
    for (n, expected) in snapshots.iter().enumerate() {
        let loaded = board.jump_to(n).expect("position exists").clone();
        assert_eq!(&loaded, expected, "snapshot after move {}", n);
        assert_eq!(board.history().restore(), *expected);
    }
}

#[test]
fn test_new_move_after_rewind_truncates_to_k_plus_one() {
    for k in 0..MOVES.len() {
        let mut board = GameBoard::replay(Player::X, &MOVES).expect("valid indices");
        board.jump_to(k).expect("position exists");

        let free = Position::ALL
            .into_iter()
            .find(|pos| board.state().square(*pos) == Square::Empty)
            .expect("a free square");
        assert!(board.record_move(free.to_index()).expect("valid index").is_accepted());

        assert_eq!(board.history().len(), k + 1, "rewound to move {}", k);
        assert_eq!(board.mode(), HistoryMode::Live);
        assert!(MonotonicHistoryInvariant::holds(board.history()));
    }
}

#[test]
fn test_viewing_alone_keeps_sequence_length() {
    let mut board = GameBoard::replay(Player::X, &MOVES).expect("valid indices");
    for position in [3, 0, 5, 1, 6] {
        board.jump_to(position).expect("position exists");
        assert_eq!(board.history().len(), MOVES.len());
    }
    assert_eq!(board.mode(), HistoryMode::Live);
}

#[test]
fn test_reviewing_mode_and_cursor() {
    let mut board = GameBoard::replay(Player::X, &MOVES).expect("valid indices");
    board.jump_to(2).expect("position exists");

    assert_eq!(board.mode(), HistoryMode::Reviewing);
    assert_eq!(board.history().cursor(), 2);
    assert_eq!(board.state().move_number(), 2);
    // After two moves X is next again.
    assert_eq!(board.current_player(), Player::X);
}

#[test]
fn test_jump_past_end_is_an_error() {
    let mut board = GameBoard::replay(Player::X, &[4, 0]).expect("valid indices");
    let err = board.jump_to(3).expect_err("no such position");
    assert_eq!(err, HistoryError::PositionOutOfRange { position: 3, len: 2 });
    assert_eq!(board.state().move_number(), 2);
}

#[test]
fn test_rewind_from_finished_game_allows_play() {
    let mut board = GameBoard::replay(Player::X, &[0, 3, 1, 4, 2]).expect("valid indices");
    assert!(board.is_finished());

    // Back to the position after X's second mark.
    board.jump_to(3).expect("position exists");
    assert!(!board.is_finished());
    assert_eq!(board.current_player(), Player::O);

    // This time O blocks the top row.
    assert!(board.record_move(2).expect("valid index").is_accepted());
    assert!(!board.is_finished());
    assert_eq!(board.history().len(), 4);
    assert_eq!(board.state().square(Position::TopRight), Square::Occupied(Player::O));
}

#[test]
fn test_history_serializes() {
    let board = GameBoard::replay(Player::X, &[4]).expect("valid indices");
    let json = serde_json::to_value(board.history()).expect("serializable");
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["snapshots"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["snapshots"][0]["current_player"], "O");
}

#[test]
fn test_loaded_history_with_cursor_past_end_is_rejected() {
    let board = GameBoard::replay(Player::X, &[4]).expect("valid indices");
    let mut json = serde_json::to_value(board.history()).expect("serializable");
    json["cursor"] = serde_json::json!(5);

    assert!(serde_json::from_value::<MoveHistoryLog>(json).is_err());
}

#[test]
fn test_loaded_history_out_of_order_is_rejected() {
    let board = GameBoard::replay(Player::X, &[4, 0]).expect("valid indices");
    let mut json = serde_json::to_value(board.history()).expect("serializable");
    if let Some(snapshots) = json["snapshots"].as_array_mut() {
        snapshots.reverse();
    }

    let err = serde_json::from_value::<MoveHistoryLog>(json).expect_err("out of order");
    assert!(err.to_string().contains("Snapshot at position 1 has move number 2"));
}

#[test]
fn test_loaded_history_keeps_playing() {
    let mut board = GameBoard::replay(Player::X, &MOVES[..3]).expect("valid indices");
    board.jump_to(1).expect("position exists");
    let json = serde_json::to_value(board.history()).expect("serializable");

    let mut loaded: MoveHistoryLog = serde_json::from_value(json).expect("valid history");
    assert_eq!(loaded.mode(), HistoryMode::Reviewing);
    assert_eq!(loaded.restore(), *board.state());

    let next = match loaded.restore().record_move(2).expect("in range") {
        strictly_rewind::MoveResult::Accepted(next) => next,
        strictly_rewind::MoveResult::Ignored(reason) => panic!("Move ignored: {}", reason),
    };
    assert_eq!(loaded.record_snapshot(next), Ok(2));
    assert_eq!(loaded.len(), 2);
}
