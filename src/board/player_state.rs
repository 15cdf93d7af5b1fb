//! Per-player piece bookkeeping.
//!
//! Uses `im` persistent collections so that cloning a board for a snapshot
//! or a what-if simulation shares structure instead of copying.
//!
//! A piece is in exactly one of three states:
//! - **supply**: waiting in the FIFO `supply` queue
//! - **active**: in `active`, standing on a space
//! - **out of play**: captured, recorded in `deactivated`
//!
//! `activated` remembers which pieces came out of supply during the game.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::era::Era;
use crate::core::PieceId;

/// One player's focus and piece sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Era this player may move pieces in this turn.
    pub focus: Era,

    /// Pieces on the board.
    pub active: OrdSet<PieceId>,

    /// Inactive pieces, front is next to activate.
    pub supply: Vector<PieceId>,

    /// Pieces that have been activated from supply.
    pub activated: OrdSet<PieceId>,

    /// Pieces removed from play.
    pub deactivated: OrdSet<PieceId>,
}

impl PlayerState {
    /// A player with every listed piece in supply, in the given order.
    pub fn new(focus: Era, supply: impl IntoIterator<Item = PieceId>) -> Self {
        Self {
            focus,
            active: OrdSet::new(),
            supply: supply.into_iter().collect(),
            activated: OrdSet::new(),
            deactivated: OrdSet::new(),
        }
    }

    /// Number of pieces still in supply.
    #[must_use]
    pub fn supply_len(&self) -> usize {
        self.supply.len()
    }

    /// Next supply piece, without removing it.
    #[must_use]
    pub fn next_in_supply(&self) -> Option<PieceId> {
        self.supply.front().copied()
    }

    /// Check if a piece is on the board.
    #[must_use]
    pub fn is_active(&self, piece: PieceId) -> bool {
        self.active.contains(&piece)
    }

    /// Check if a piece has been removed from play.
    #[must_use]
    pub fn is_out_of_play(&self, piece: PieceId) -> bool {
        self.deactivated.contains(&piece)
    }
}
