//! Tests for interactive play driven by in-memory input.

use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

use strictly_tictactoe::Player;
use strictly_tictactoe_ai::{Difficulty, MoveSelector};
use strictly_tictactoe_cli::{PlaySession, load_config};

/// Tries every cell in order; occupied cells are rejected and skipped.
const EVERY_CELL: &str = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";

#[test]
fn test_hard_engine_does_not_lose_a_round() {
    let engine = MoveSelector::with_seed(Difficulty::Hard, 1);
    let mut session = PlaySession::new(engine, false);
    let mut output = Vec::new();

    session
        .run(Cursor::new(EVERY_CELL), &mut output)
        .expect("session failed");

    let text = String::from_utf8(output).unwrap();
    let score = session.score();
    assert_eq!(score.games(), 1, "{text}");
    assert_eq!(score.wins(Player::X), 0);
    assert!(text.contains("Score: X: 0"));
}

#[test]
fn test_quit_before_finishing() {
    let engine = MoveSelector::with_seed(Difficulty::Easy, 2);
    let mut session = PlaySession::new(engine, false);
    let mut output = Vec::new();

    session
        .run(Cursor::new("5\nq\n"), &mut output)
        .expect("session failed");

    assert_eq!(session.score().games(), 0);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Engine plays"));
}

#[test]
fn test_bad_input_is_reported() {
    let engine = MoveSelector::with_seed(Difficulty::Medium, 3);
    let mut session = PlaySession::new(engine, false);
    let mut output = Vec::new();

    session
        .run(Cursor::new("banana\nq\n"), &mut output)
        .expect("session failed");

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Not a cell: \"banana\""));
}

#[test]
fn test_engine_moves_first_as_x() {
    let engine = MoveSelector::with_seed(Difficulty::Hard, 4).with_mark(Player::X);
    let mut session = PlaySession::new(engine, false);
    let mut output = Vec::new();

    session
        .run(Cursor::new("q\n"), &mut output)
        .expect("session failed");

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("You are O."));
    assert!(text.contains("Engine plays Top-left (0, 0)"));
}

/// X takes the top row while O answers on the middle row.
const X_WINS_TOP_ROW: &str = "1\n4\n2\n5\n3\n";

#[test]
fn test_two_player_round() {
    let mut session = PlaySession::two_player();
    let mut output = Vec::new();

    session
        .run(Cursor::new(format!("{X_WINS_TOP_ROW}n\n")), &mut output)
        .expect("session failed");

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("X and O take turns."));
    assert!(text.contains("Your move (O):"));
    assert!(text.contains("X wins!"), "{text}");
    assert!(!text.contains("Engine plays"));
    assert!(text.contains("Score: X: 1  O: 0  Draws: 0"));
    assert_eq!(session.score().wins(Player::X), 1);
}

#[test]
fn test_next_round_keeps_score() {
    let mut session = PlaySession::two_player();
    let mut output = Vec::new();
    // Second round: X takes the middle row.
    let input = format!("{X_WINS_TOP_ROW}y\n4\n1\n5\n2\n6\nn\n");

    session
        .run(Cursor::new(input), &mut output)
        .expect("session failed");

    assert_eq!(session.score().wins(Player::X), 2);
    assert_eq!(session.score().games(), 2);
}

#[test]
fn test_new_game_resets_score() {
    let mut session = PlaySession::two_player();
    let mut output = Vec::new();

    session
        .run(Cursor::new(format!("{X_WINS_TOP_ROW}r\nq\n")), &mut output)
        .expect("session failed");

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Score: X: 1  O: 0  Draws: 0"));
    assert!(text.contains("Scores reset. Score: X: 0  O: 0  Draws: 0"), "{text}");
    assert_eq!(session.score().games(), 0);
}

#[test]
fn test_load_config_defaults_when_missing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = load_config(dir.path().join("none.toml")).expect("load failed");
    assert_eq!(*config.difficulty(), Difficulty::Easy);
}

#[test]
fn test_load_config_reads_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("strictly_tictactoe.toml");
    fs::write(&path, "difficulty = \"medium\"\nthink_delay = false\n").expect("Write failed");

    let config = load_config(&path).expect("load failed");
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert!(!*config.think_delay());
}
