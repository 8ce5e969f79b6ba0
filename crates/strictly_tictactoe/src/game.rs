//! Referee for a single game of tic-tac-toe.
//!
//! The engine only ever sees board snapshots. Something still has to
//! apply moves, alternate turns and notice when the game ends; that
//! is this module.

use super::rules;
use super::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns a snapshot of the board.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the positions played so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Number of marks placed so far.
    pub fn round(&self) -> usize {
        self.history.len()
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns the outcome after the move. The turn passes to the
    /// opponent only while the game is still in progress.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already ended and
    /// [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        let before = self.outcome();
        if before.is_terminal() {
            return Err(MoveError::GameOver(before));
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);

        let after = self.outcome();
        if !after.is_terminal() {
            self.to_move = self.to_move.opponent();
        }
        debug!(position = %pos, outcome = %after, "Move applied");
        Ok(after)
    }

    /// Clears the board for a new round; X moves first again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
