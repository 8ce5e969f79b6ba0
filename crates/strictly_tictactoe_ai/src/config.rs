//! Engine configuration.

use crate::difficulty::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Player;
use tracing::{debug, info, instrument};

/// Configuration for a [`MoveSelector`](crate::MoveSelector) and the
/// front end driving it.
///
/// Every field has a default, so an empty TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AiConfig {
    /// Starting difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark the engine plays.
    #[serde(default = "default_ai_mark")]
    ai_mark: Player,

    /// Fixed RNG seed; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before engine moves in interactive play.
    #[serde(default = "default_think_delay")]
    think_delay: bool,

    /// Tracing filter directive, e.g. `"debug"` or `"strictly_tictactoe_ai=trace"`.
    #[serde(default)]
    log_filter: Option<String>,
}

#[instrument]
fn default_ai_mark() -> Player {
    Player::O
}

#[instrument]
fn default_think_delay() -> bool {
    true
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            ai_mark: default_ai_mark(),
            seed: None,
            think_delay: default_think_delay(),
            log_filter: None,
        }
    }
}

impl AiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, ai_mark = %config.ai_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the engine's mark.
    pub fn with_ai_mark(mut self, ai_mark: Player) -> Self {
        self.ai_mark = ai_mark;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the thinking pause.
    pub fn with_think_delay(mut self, think_delay: bool) -> Self {
        self.think_delay = think_delay;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
