//! Pieces in the board arena.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::core::{Color, PieceId};

/// A piece and where it currently stands.
///
/// `position` is `Some` exactly when a space on the board holds this piece;
/// the board keeps the two in sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Stable identity, also the arena index.
    pub id: PieceId,
    /// Current space, if on the board.
    pub position: Option<Position>,
}

impl Piece {
    /// A piece not yet on the board.
    #[must_use]
    pub const fn new(id: PieceId) -> Self {
        Self { id, position: None }
    }

    /// The owning player.
    #[must_use]
    pub const fn owner(&self) -> Color {
        self.id.owner()
    }

    /// Display glyph.
    #[must_use]
    pub fn glyph(&self) -> char {
        self.id.glyph()
    }

    /// Is this piece standing on a space?
    #[must_use]
    pub const fn is_on_board(&self) -> bool {
        self.position.is_some()
    }
}
