//! Strictly Tic-Tac-Toe - board model and rules
//!
//! Pure game logic with no I/O: the board, its named cells, win and
//! draw detection, and a small referee that applies moves.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{rules, Board, Outcome, Player, Position};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let board = board.place(Position::TopRight, Player::X);
//! assert_eq!(rules::outcome(&board), Outcome::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod notation;
mod position;
mod scoreboard;
mod types;

pub mod rules;

pub use game::{Game, MoveError};
pub use notation::BoardParseError;
pub use position::Position;
pub use scoreboard::Scoreboard;
pub use types::{Board, Outcome, Player, Square};
