//! Difficulty-aware move selection.

use crate::config::AiConfig;
use crate::difficulty::Difficulty;
use crate::strategy::{HeuristicStrategy, MinimaxStrategy, RandomStrategy, StrategyKind};
use derive_new::new;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Board, Player, Position, rules};
use tracing::{debug, info, instrument};

/// A chosen move and the strategy that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Strategy that produced the cell.
    pub strategy: StrategyKind,
}

/// The engine: picks a move for its mark at the configured difficulty.
///
/// Owns its random source and difficulty; selection takes `&mut self`
/// and is not synchronised, so share an instance across threads only
/// behind your own lock.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    difficulty: Difficulty,
    mark: Player,
    rng: StdRng,
}

impl MoveSelector {
    /// Creates an engine playing O, seeded from OS entropy.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Creates an engine with a fixed seed, for reproducible play.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }

    fn with_rng(difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            difficulty,
            mark: Player::O,
            rng,
        }
    }

    /// Builds an engine from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &AiConfig) -> Self {
        let selector = match config.seed() {
            Some(seed) => Self::with_seed(*config.difficulty(), *seed),
            None => Self::new(*config.difficulty()),
        };
        selector.with_mark(*config.ai_mark())
    }

    /// Sets which mark the engine plays.
    pub fn with_mark(mut self, mark: Player) -> Self {
        self.mark = mark;
        self
    }

    /// Changes the difficulty; applies from the next move on.
    #[instrument(skip(self), fields(from = %self.difficulty))]
    pub fn configure(&mut self, difficulty: Difficulty) {
        info!(to = %difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Mark the engine plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Picks a move at the configured difficulty.
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        self.select_move(board, self.difficulty)
    }

    /// Picks a move at `difficulty`.
    ///
    /// Returns `None` only when the board has no empty cells. The
    /// board should not already have a winner.
    pub fn select_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<Position> {
        self.decide(board, difficulty).map(|d| d.position)
    }

    /// Like [`select_move`](Self::select_move), also reporting which
    /// strategy made the choice.
    #[instrument(skip(self, board), fields(board = %board, mark = %self.mark))]
    pub fn decide(&mut self, board: &Board, difficulty: Difficulty) -> Option<Decision> {
        if rules::is_full(board) {
            debug!("No empty cells");
            return None;
        }

        let strategy = match difficulty.random_move_probability() {
            Some(p) if self.rng.random_bool(p) => StrategyKind::Random,
            Some(_) => StrategyKind::Heuristic,
            None => StrategyKind::Minimax,
        };

        let me = self.mark;
        let position = match strategy {
            StrategyKind::Random => RandomStrategy::pick(board, &mut self.rng),
            StrategyKind::Heuristic => {
                HeuristicStrategy::pick(board, me, me.opponent(), &mut self.rng)
            }
            StrategyKind::Minimax => MinimaxStrategy::pick(board, me),
        }?;

        debug!(%strategy, position = %position, "Move selected");
        Some(Decision::new(position, strategy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_full_board_no_move_any_difficulty() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        for difficulty in Difficulty::iter() {
            let mut engine = MoveSelector::with_seed(difficulty, 1);
            assert_eq!(engine.best_move(&board), None, "{difficulty}");
            assert_eq!(engine.decide(&board, difficulty), None);
        }
    }

    #[test]
    fn test_hard_always_minimax() {
        let mut engine = MoveSelector::with_seed(Difficulty::Hard, 5);
        let board: Board = "X../.../...".parse().unwrap();
        for _ in 0..5 {
            let decision = engine.decide(&board, Difficulty::Hard).unwrap();
            assert_eq!(decision.strategy, StrategyKind::Minimax);
            assert_eq!(decision.position, Position::Center);
        }
    }

    #[test]
    fn test_configure_applies_to_next_move() {
        let mut engine = MoveSelector::with_seed(Difficulty::Easy, 9);
        engine.configure(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        // O must block the top row.
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(engine.best_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_with_mark() {
        let mut engine = MoveSelector::with_seed(Difficulty::Hard, 2).with_mark(Player::X);
        assert_eq!(engine.mark(), Player::X);
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(engine.best_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = MoveSelector::with_seed(Difficulty::Easy, 1234);
        let mut b = MoveSelector::with_seed(Difficulty::Easy, 1234);
        for _ in 0..20 {
            assert_eq!(a.best_move(&board), b.best_move(&board));
        }
    }
}
