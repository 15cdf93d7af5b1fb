//! Win evaluation by era presence.
//!
//! A player's presence is the number of eras holding at least one of their
//! active pieces. Dropping to one era or fewer loses.
//!
//! ## Double elimination
//!
//! If both players are down to one era at once, the player who just moved
//! loses and the opponent wins. With no mover to attribute it to, the result
//! is a draw.

use tracing::debug;

use super::outcome::GameOutcome;
use crate::board::{Board, Era};
use crate::core::Color;

/// Presence at or below this loses.
pub const ELIMINATION_PRESENCE: usize = 1;

/// Number of eras in which `color` has at least one active piece.
#[must_use]
pub fn presence(board: &Board, color: Color) -> usize {
    Era::ALL
        .into_iter()
        .filter(|&era| board.count_in_era(era, color) > 0)
        .count()
}

/// Check if `color` has been reduced to one era or fewer.
#[must_use]
pub fn is_eliminated(board: &Board, color: Color) -> bool {
    presence(board, color) <= ELIMINATION_PRESENCE
}

/// Decide the outcome of `board`.
///
/// `last_mover` is the player whose move produced the board, if any; it
/// only matters when both players are eliminated together.
#[must_use]
pub fn evaluate(board: &Board, last_mover: Option<Color>) -> GameOutcome {
    let white_out = is_eliminated(board, Color::White);
    let black_out = is_eliminated(board, Color::Black);

    let outcome = match (white_out, black_out) {
        (false, false) => GameOutcome::Playing,
        (true, false) => GameOutcome::won_by(Color::Black),
        (false, true) => GameOutcome::won_by(Color::White),
        (true, true) => match last_mover {
            Some(mover) => GameOutcome::won_by(mover.opponent()),
            None => GameOutcome::Draw,
        },
    };

    if outcome.is_terminal() {
        debug!(%outcome, ?last_mover, "game decided");
    }
    outcome
}
