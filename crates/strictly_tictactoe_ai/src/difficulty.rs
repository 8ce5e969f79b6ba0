//! Difficulty levels for the engine.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How hard the engine tries.
///
/// Easy and Medium mix random moves with the heuristic player in
/// fixed proportions; Hard always searches the full game tree.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Mostly random, occasionally sensible.
    #[default]
    Easy,
    /// Mostly sensible, occasionally random.
    Medium,
    /// Perfect play.
    Hard,
}

impl Difficulty {
    /// Chance that a move is chosen uniformly at random.
    ///
    /// `None` means the level never plays randomly and uses the full
    /// search instead of the heuristic.
    #[instrument]
    pub fn random_move_probability(self) -> Option<f64> {
        match self {
            Difficulty::Easy => Some(0.7),
            Difficulty::Medium => Some(0.3),
            Difficulty::Hard => None,
        }
    }
}
