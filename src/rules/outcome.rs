//! Game outcome.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::Color;

/// State of a game: still running, or how it ended.
///
/// Terminal outcomes are absorbing; a finished game accepts no more moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No winner yet.
    #[default]
    #[display("playing")]
    Playing,
    /// White won.
    #[display("white won")]
    WhiteWon,
    /// Black won.
    #[display("black won")]
    BlackWon,
    /// Nobody won. Only reported for a double elimination with no known mover.
    #[display("draw")]
    Draw,
}

impl GameOutcome {
    /// The outcome in which `color` wins.
    #[must_use]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameOutcome::WhiteWon,
            Color::Black => GameOutcome::BlackWon,
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Playing)
    }

    /// The winning player, if there is one.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::WhiteWon => Some(Color::White),
            GameOutcome::BlackWon => Some(Color::Black),
            GameOutcome::Playing | GameOutcome::Draw => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, color: Color) -> bool {
        self.winner() == Some(color)
    }
}
