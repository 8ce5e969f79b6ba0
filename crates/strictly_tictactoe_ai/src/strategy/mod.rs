//! Move-picking strategies.
//!
//! Each strategy is a set of pure functions over a board snapshot.
//! Hypothetical moves are tried on copies, so the caller's board is
//! never touched.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use serde::{Deserialize, Serialize};

/// Which strategy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrategyKind {
    /// Uniform choice among empty cells.
    Random,
    /// Win, block, center, corner, then random.
    Heuristic,
    /// Full game-tree search.
    Minimax,
}
