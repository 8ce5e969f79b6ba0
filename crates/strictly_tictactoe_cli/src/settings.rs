//! Config loading and one-shot suggestions.

use anyhow::{Context, Result};
use std::path::Path;
use strictly_tictactoe::{Board, Outcome, Player, rules};
use strictly_tictactoe_ai::{AiConfig, Decision, MoveSelector};
use tracing::{debug, info, instrument};

/// Answer to a one-shot `suggest` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    /// The engine's move.
    Move(Decision),
    /// The board is already won or drawn; the engine is not consulted.
    GameOver(Outcome),
}

/// Loads the config file, or defaults when it doesn't exist.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_config(path: impl AsRef<Path>) -> Result<AiConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No config file, using defaults");
        return Ok(AiConfig::default());
    }
    Ok(AiConfig::from_file(path)?)
}

/// Asks a fresh engine for its move on `board`.
///
/// The engine plays `mark`, or whoever is to move on the board when
/// `mark` is `None`. Finished boards are answered with their outcome.
#[instrument(skip(config), fields(board = %board))]
pub fn suggest(config: &AiConfig, board: &Board, mark: Option<Player>) -> Result<Suggestion> {
    let outcome = rules::outcome(board);
    if outcome.is_terminal() {
        info!(%outcome, "Board is finished, nothing to suggest");
        return Ok(Suggestion::GameOver(outcome));
    }

    let mark = mark.unwrap_or_else(|| board.next_player());
    let mut engine = MoveSelector::from_config(config).with_mark(mark);
    let difficulty = engine.difficulty();
    let decision = engine
        .decide(board, difficulty)
        .context("engine found no move on an unfinished board")?;
    Ok(Suggestion::Move(decision))
}
