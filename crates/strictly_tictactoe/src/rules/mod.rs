//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Nothing here caches: every call
//! recomputes from the board it is handed.

pub mod cells;
pub mod draw;
pub mod win;

pub use cells::empty_cells;
pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A completed line wins even on a full board.
#[instrument]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        Outcome::Won(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// True if the board has a winner or no empty squares left.
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_terminal()
}
