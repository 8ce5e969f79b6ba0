//! Exhaustive game-tree search.
//!
//! Plain minimax over every reachable position with no pruning and
//! no caching. A 3x3 board has fewer than 9! move sequences, so the
//! full tree is searched on every call.

use strictly_tictactoe::{Board, Player, Position, rules};
use tracing::{debug, instrument};

/// Score of a win found at depth zero. Deeper wins score less.
const WIN_SCORE: i32 = 10;

/// Perfect-play strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl MinimaxStrategy {
    /// Returns the highest-scoring move for `me`.
    ///
    /// Ties go to the earliest cell in row-major order. `None` on a
    /// full board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn pick(board: &Board, me: Player) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in Self::score_moves(board, me) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        if let Some((pos, score)) = best {
            debug!(position = %pos, score, "Minimax choice");
        }
        best.map(|(pos, _)| pos)
    }

    /// Scores every empty cell as `me`'s next move, in row-major order.
    pub fn score_moves(board: &Board, me: Player) -> Vec<(Position, i32)> {
        rules::empty_cells(board)
            .into_iter()
            .map(|pos| (pos, Self::evaluate(&board.place(pos, me), me, 0, false)))
            .collect()
    }

    /// Minimax value of `board` from `me`'s point of view.
    ///
    /// `depth` counts plies below the move being scored and
    /// `maximizing` says whether `me` is the side to move. A win for
    /// `me` scores `10 - depth`, a loss `depth - 10`, a draw `0`.
    pub fn evaluate(board: &Board, me: Player, depth: i32, maximizing: bool) -> i32 {
        match rules::check_winner(board) {
            Some(winner) if winner == me => return WIN_SCORE - depth,
            Some(_) => return depth - WIN_SCORE,
            None => {}
        }
        if rules::is_full(board) {
            return 0;
        }

        let to_move = if maximizing { me } else { me.opponent() };
        let scores = rules::empty_cells(board)
            .into_iter()
            .map(|pos| Self::evaluate(&board.place(pos, to_move), me, depth + 1, !maximizing));

        // The board is not full, so there is at least one child.
        if maximizing {
            scores.max().unwrap_or(0)
        } else {
            scores.min().unwrap_or(0)
        }
    }
}
