//! Strictly Tic-Tac-Toe CLI library
//!
//! The pieces behind the `strictly_tictactoe` binary, exposed so they
//! can be driven from tests with in-memory I/O.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod cli;
mod logging;
mod play;
mod settings;

pub use arena::Arena;
pub use cli::{Cli, Command};
pub use logging::init_tracing;
pub use play::{PlaySession, think_delay};
pub use settings::{Suggestion, load_config, suggest};
