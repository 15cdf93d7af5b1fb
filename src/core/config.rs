//! Game configuration.
//!
//! A game is configured at startup with:
//! - The kind of strategy driving each color
//! - Whether undo/redo history is kept
//! - Whether score summaries are exposed
//! - A seed for the AI strategies and a turn bound for automated matches
//!
//! Parsing the words a launcher accepts (`human`, `heuristic`, `random`,
//! `on`, `off`) lives here; reading them from argv does not.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ConfigError;
use super::player::{Color, PlayerMap};

/// What drives one side of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Moves come from an external input collaborator.
    #[default]
    Human,
    /// Greedy one-ply search over the score summary.
    Heuristic,
    /// Uniformly random legal move.
    Random,
}

impl StrategyKind {
    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Human => "human",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Random => "random",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "human" => Ok(StrategyKind::Human),
            "heuristic" => Ok(StrategyKind::Heuristic),
            "random" => Ok(StrategyKind::Random),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Parse an `on`/`off` toggle.
///
/// ```
/// use rust_eras::core::config::parse_toggle;
///
/// assert_eq!(parse_toggle("on"), Ok(true));
/// assert_eq!(parse_toggle("OFF"), Ok(false));
/// assert!(parse_toggle("yes").is_err());
/// ```
pub fn parse_toggle(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(ConfigError::UnknownToggle(value.to_string())),
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Strategy kind per color.
    pub players: PlayerMap<StrategyKind>,

    /// Keep snapshot history for undo/redo.
    pub undo_redo: bool,

    /// Expose per-player score summaries.
    pub score: bool,

    /// Seed for AI strategies.
    pub seed: u64,

    /// Upper bound on turn attempts in an automated match.
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: PlayerMap::with_value(StrategyKind::Human),
            undo_redo: false,
            score: false,
            seed: 42,
            max_turns: 500,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (two humans, no undo, no score).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy kind for one color.
    #[must_use]
    pub fn with_player(mut self, color: Color, kind: StrategyKind) -> Self {
        self.players[color] = kind;
        self
    }

    /// Enable or disable undo/redo history.
    #[must_use]
    pub fn with_undo_redo(mut self, enabled: bool) -> Self {
        self.undo_redo = enabled;
        self
    }

    /// Enable or disable score summaries.
    #[must_use]
    pub fn with_score(mut self, enabled: bool) -> Self {
        self.score = enabled;
        self
    }

    /// Set the AI seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the automated-match turn bound.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Strategy kind for a color.
    #[must_use]
    pub fn strategy(&self, color: Color) -> StrategyKind {
        self.players[color]
    }
}
