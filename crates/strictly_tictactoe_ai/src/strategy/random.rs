//! Uniform random move.

use rand::Rng;
use rand::seq::IndexedRandom;
use strictly_tictactoe::{Board, Position, rules};
use tracing::instrument;

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// Returns a random empty cell, or `None` on a full board.
    #[instrument(skip(board, rng), fields(board = %board))]
    pub fn pick<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
        rules::empty_cells(board).choose(rng).copied()
    }
}
