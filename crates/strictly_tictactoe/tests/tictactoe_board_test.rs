//! Tests for tic-tac-toe board analysis through the public API.

use strictly_tictactoe::{Board, Game, Outcome, Player, Position, Scoreboard, Square, rules};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_empty_cells_row_major_on_empty_board() {
    let cells: Vec<(usize, usize)> = rules::empty_cells(&Board::new())
        .into_iter()
        .map(|p| (p.row(), p.col()))
        .collect();
    assert_eq!(
        cells,
        [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2)
        ]
    );
}

#[test]
fn test_empty_cells_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = rules::empty_cells(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_board_serde_round_trip_keeps_squares() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_full_game_through_referee() {
    // X O X / X O O / O X X ends in a draw
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    let mut game = Game::new();
    let mut score = Scoreboard::new();
    let mut last = Outcome::InProgress;
    for pos in moves {
        last = game.make_move(pos).unwrap();
    }
    score.record(last);

    assert_eq!(last, Outcome::Draw);
    assert_eq!(game.board().to_string(), "XOX/XOO/OXX");
    assert_eq!(score.draws(), 1);
}
