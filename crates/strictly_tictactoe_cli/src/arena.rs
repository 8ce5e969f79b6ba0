//! Engine-versus-engine matches.

use anyhow::{Context, Result};
use strictly_tictactoe::{Game, Outcome, Player, Scoreboard};
use strictly_tictactoe_ai::MoveSelector;
use tracing::{debug, info, instrument};

/// Two engines, one per mark.
#[derive(Debug)]
pub struct Arena {
    x: MoveSelector,
    o: MoveSelector,
    score: Scoreboard,
}

impl Arena {
    /// Creates an arena; each engine is assigned the mark it plays here.
    #[instrument(skip(x, o), fields(x = %x.difficulty(), o = %o.difficulty()))]
    pub fn new(x: MoveSelector, o: MoveSelector) -> Self {
        Self {
            x: x.with_mark(Player::X),
            o: o.with_mark(Player::O),
            score: Scoreboard::new(),
        }
    }

    /// Plays one game to completion and records it.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<Outcome> {
        let mut game = Game::new();
        let mut outcome = game.outcome();
        while !outcome.is_terminal() {
            let board = game.board();
            let engine = match game.to_move() {
                Player::X => &mut self.x,
                Player::O => &mut self.o,
            };
            let pos = engine
                .best_move(&board)
                .context("engine found no move on an unfinished board")?;
            outcome = game.make_move(pos)?;
        }
        debug!(board = %game.board(), %outcome, "Game finished");
        self.score.record(outcome);
        Ok(outcome)
    }

    /// Plays `games` games and returns the totals.
    #[instrument(skip(self))]
    pub fn run(&mut self, games: u32) -> Result<Scoreboard> {
        for _ in 0..games {
            self.play_game()?;
        }
        info!(score = %self.score, "Arena finished");
        Ok(self.score)
    }

    /// Totals so far.
    pub fn score(&self) -> Scoreboard {
        self.score
    }
}
