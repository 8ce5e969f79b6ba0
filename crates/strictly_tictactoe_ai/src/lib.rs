//! Strictly Tic-Tac-Toe AI - move selection by difficulty
//!
//! Given a board snapshot, [`MoveSelector`] picks a cell for its mark.
//!
//! # Architecture
//!
//! - **Random**: uniform choice among empty cells
//! - **Heuristic**: win, block, center, corner, then random
//! - **Minimax**: exhaustive search, never loses
//! - **Selector**: Easy plays random 70% of the time and heuristic
//!   otherwise, Medium 30% random, Hard always minimax
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Position};
//! use strictly_tictactoe_ai::{Difficulty, MoveSelector};
//!
//! let mut engine = MoveSelector::new(Difficulty::Hard);
//! // O to move; X threatens the top row.
//! let board: Board = "XX./.O./...".parse().unwrap();
//! assert_eq!(engine.best_move(&board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod difficulty;
mod selector;
mod strategy;

pub use config::{AiConfig, ConfigError};
pub use difficulty::Difficulty;
pub use selector::{Decision, MoveSelector};
pub use strategy::{HeuristicStrategy, MinimaxStrategy, RandomStrategy, StrategyKind};
