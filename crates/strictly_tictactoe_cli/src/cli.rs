//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Player};
use strictly_tictactoe_ai::Difficulty;

/// Strictly Tic-Tac-Toe - play against a difficulty-aware engine
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe against an engine with three difficulty levels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if it does not exist)
    #[arg(long, global = true, default_value = "strictly_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine, or another human, in the terminal
    Play {
        /// Engine difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Let the engine play X and move first
        #[arg(long)]
        ai_first: bool,

        /// Skip the pause before engine moves
        #[arg(long)]
        no_delay: bool,

        /// Two humans take turns at the prompt; the engine sits out
        #[arg(long, conflicts_with_all = ["difficulty", "ai_first"])]
        two_player: bool,
    },

    /// Print the engine's move for a board
    Suggest {
        /// Board in row-major notation, e.g. "XX./.O./..."
        #[arg(short, long)]
        board: Board,

        /// Engine difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark to move for; inferred from the board when omitted
        #[arg(short, long)]
        mark: Option<Player>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pit two engines against each other
    Arena {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Difficulty of the X engine
        #[arg(long, default_value = "hard")]
        x_difficulty: Difficulty,

        /// Difficulty of the O engine
        #[arg(long, default_value = "hard")]
        o_difficulty: Difficulty,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}
