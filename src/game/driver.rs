//! Automated matches between two strategies.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::session::{Game, TurnOutcome};
use crate::core::{Color, GameConfig, PlayerMap};
use crate::moves::MoveDescriptor;
use crate::rules::GameOutcome;
use crate::strategy::{create_players, Strategy};

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The outcome became terminal.
    Decided,
    /// A strategy offered no move.
    NoMove(Color),
    /// The turn attempt bound ran out first.
    TurnLimit,
}

/// Summary of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Outcome when the match stopped.
    pub outcome: GameOutcome,
    /// Why it stopped.
    pub stop: StopReason,
    /// Turn number when it stopped.
    pub turn: u32,
    /// Committed moves in order.
    pub moves: Vec<MoveDescriptor>,
    /// Number of rejected proposals.
    pub rejected: u32,
}

/// Play `game` to the end with one strategy per color.
///
/// Every proposal, committed or rejected, counts against the configured
/// `max_turns` bound.
pub fn play_match(game: &mut Game, white: &mut dyn Strategy, black: &mut dyn Strategy) -> MatchReport {
    let max_turns = game.config().max_turns;
    let mut moves = Vec::new();
    let mut rejected = 0;
    let mut attempts = 0;

    let stop = loop {
        if game.is_over() {
            break StopReason::Decided;
        }
        if attempts >= max_turns {
            break StopReason::TurnLimit;
        }
        attempts += 1;

        let color = game.to_move();
        let strategy: &mut dyn Strategy = match color {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        match game.play_turn(strategy) {
            TurnOutcome::NoMove => break StopReason::NoMove(color),
            TurnOutcome::Rejected { .. } => rejected += 1,
            TurnOutcome::Committed { mv, .. } => {
                debug!(%color, %mv, turn = game.turn(), "committed");
                moves.push(mv);
            }
        }
    };

    info!(outcome = %game.outcome(), ?stop, turn = game.turn(), rejected, "match finished");
    MatchReport {
        outcome: game.outcome(),
        stop,
        turn: game.turn(),
        moves,
        rejected,
    }
}

/// Play a fresh game between the AI strategies named in `config`.
///
/// Returns `None` if either seat is human.
#[must_use]
pub fn play_configured(config: GameConfig) -> Option<MatchReport> {
    let players: PlayerMap<Option<Box<dyn Strategy>>> = create_players(&config);
    let [Some(mut white), Some(mut black)] = players.into_array() else {
        return None;
    };

    let mut game = Game::new(config);
    Some(play_match(&mut game, white.as_mut(), black.as_mut()))
}
