//! Strategy construction from configuration.

use super::{HeuristicStrategy, RandomStrategy, Strategy};
use crate::core::{Color, GameConfig, GameRng, PlayerMap, StrategyKind};

/// Build an AI strategy seeded with `seed`.
///
/// Returns `None` for [`StrategyKind::Human`]: human input comes from
/// outside the crate.
#[must_use]
pub fn create_ai(kind: StrategyKind, seed: u64) -> Option<Box<dyn Strategy>> {
    create_ai_with_rng(kind, GameRng::new(seed))
}

/// Build an AI strategy drawing from `rng`.
#[must_use]
pub fn create_ai_with_rng(kind: StrategyKind, rng: GameRng) -> Option<Box<dyn Strategy>> {
    match kind {
        StrategyKind::Human => None,
        StrategyKind::Heuristic => Some(Box::new(HeuristicStrategy::with_rng(rng))),
        StrategyKind::Random => Some(Box::new(RandomStrategy::with_rng(rng))),
    }
}

/// Build both players' AI strategies from a configuration.
///
/// Each player draws from its own fork of the configured seed, so the two
/// never share a random stream. Human seats are `None`.
#[must_use]
pub fn create_players(config: &GameConfig) -> PlayerMap<Option<Box<dyn Strategy>>> {
    let mut root = GameRng::new(config.seed);
    let forks = [root.fork(), root.fork()];
    PlayerMap::new(|color: Color| {
        create_ai_with_rng(config.strategy(color), forks[color.index()].clone())
    })
}
