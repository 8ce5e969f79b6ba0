//! Rule-based player: win, block, center, corner, anything.

use super::RandomStrategy;
use rand::Rng;
use rand::seq::IndexedRandom;
use strictly_tictactoe::{Board, Player, Position, rules};
use tracing::{debug, instrument};

/// Plays by a fixed priority list of simple rules.
///
/// The rules are tried in order and the first one that yields a
/// cell wins:
///
/// 1. complete a line for `me`
/// 2. block a line the opponent would complete
/// 3. take the center
/// 4. take a random free corner
/// 5. take a random free cell
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    /// Picks a move for `me`, or `None` on a full board.
    #[instrument(skip(board, rng), fields(board = %board))]
    pub fn pick<R: Rng + ?Sized>(
        board: &Board,
        me: Player,
        opponent: Player,
        rng: &mut R,
    ) -> Option<Position> {
        if let Some(pos) = Self::winning_move(board, me) {
            debug!(position = %pos, "Taking the win");
            return Some(pos);
        }

        if let Some(pos) = Self::winning_move(board, opponent) {
            debug!(position = %pos, "Blocking");
            return Some(pos);
        }

        if board.is_empty(Position::Center) {
            debug!("Taking the center");
            return Some(Position::Center);
        }

        let corners: Vec<Position> = Position::CORNERS
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        if let Some(&pos) = corners.choose(rng) {
            debug!(position = %pos, "Taking a corner");
            return Some(pos);
        }

        RandomStrategy::pick(board, rng)
    }

    /// First empty cell, in row-major order, that completes a line
    /// for `player`.
    pub fn winning_move(board: &Board, player: Player) -> Option<Position> {
        rules::empty_cells(board)
            .into_iter()
            .find(|&pos| rules::check_winner(&board.place(pos, player)) == Some(player))
    }
}
