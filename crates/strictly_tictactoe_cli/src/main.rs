//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Play the engine, ask it for a move, or watch two engines play.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_tictactoe::Player;
use strictly_tictactoe_ai::MoveSelector;
use strictly_tictactoe_cli::{
    Arena, Cli, Command, PlaySession, Suggestion, init_tracing, load_config, suggest,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    init_tracing(config.log_filter().as_deref());
    info!(config = %cli.config.display(), "Starting strictly_tictactoe");

    match cli.command {
        Command::Play {
            difficulty,
            ai_first,
            no_delay,
            two_player,
        } => {
            if two_player {
                let mut session = PlaySession::two_player();
                return session.run(io::stdin().lock(), io::stdout().lock());
            }
            let mut config = config;
            if let Some(difficulty) = difficulty {
                config = config.with_difficulty(difficulty);
            }
            if ai_first {
                config = config.with_ai_mark(Player::X);
            }
            let think = *config.think_delay() && !no_delay;
            let mut session = PlaySession::new(MoveSelector::from_config(&config), think);
            session.run(io::stdin().lock(), io::stdout().lock())
        }
        Command::Suggest {
            board,
            difficulty,
            mark,
            json,
        } => {
            let config = match difficulty {
                Some(difficulty) => config.with_difficulty(difficulty),
                None => config,
            };
            match suggest(&config, &board, mark)? {
                Suggestion::Move(decision) if json => {
                    println!("{}", serde_json::to_string(&decision)?)
                }
                Suggestion::Move(decision) => {
                    println!("{} via {}", decision.position, decision.strategy)
                }
                Suggestion::GameOver(outcome) if json => {
                    println!("{}", serde_json::json!({ "game_over": outcome.to_string() }))
                }
                Suggestion::GameOver(outcome) => println!("game over: {}", outcome),
            }
            Ok(())
        }
        Command::Arena {
            games,
            x_difficulty,
            o_difficulty,
            seed,
        } => {
            let (x, o) = match seed.or(*config.seed()) {
                Some(seed) => (
                    MoveSelector::with_seed(x_difficulty, seed),
                    MoveSelector::with_seed(o_difficulty, seed.wrapping_add(1)),
                ),
                None => (
                    MoveSelector::new(x_difficulty),
                    MoveSelector::new(o_difficulty),
                ),
            };
            let score = Arena::new(x, o).run(games)?;
            println!(
                "{} games, X ({}) vs O ({}): {}",
                score.games(),
                x_difficulty,
                o_difficulty,
                score
            );
            Ok(())
        }
    }
}
