//! Piece identification.
//!
//! Every piece in the game has a stable `PieceId`, which is also its index in
//! the board's piece arena.
//!
//! ## ID Layout
//!
//! - `0..7`: White pieces, glyphs `A`..`G`
//! - `7..14`: Black pieces, glyphs `1`..`7`
//!
//! The first [`STARTING_ACTIVE`] ordinals of each player start on the board,
//! the rest start in supply.
//!
//! ```
//! use rust_eras::core::{Color, PieceId};
//!
//! let b = PieceId::for_player(Color::White, 1);
//! assert_eq!(b.glyph(), 'B');
//! assert_eq!(b.owner(), Color::White);
//! assert_eq!(PieceId::from_glyph('5').map(PieceId::owner), Some(Color::Black));
//! ```

use serde::{Deserialize, Serialize};

use super::player::Color;

/// Pieces each player owns for the whole game.
pub const PIECES_PER_PLAYER: usize = 7;

/// Pieces each player has on the board at game start (one per era).
pub const STARTING_ACTIVE: usize = 3;

/// Total pieces in the arena.
pub const PIECE_COUNT: usize = 2 * PIECES_PER_PLAYER;

const WHITE_GLYPHS: [char; PIECES_PER_PLAYER] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];
const BLACK_GLYPHS: [char; PIECES_PER_PLAYER] = ['1', '2', '3', '4', '5', '6', '7'];

/// Stable identifier of a piece; doubles as its arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Id of a player's `ordinal`-th piece (0-based).
    ///
    /// Panics if `ordinal >= PIECES_PER_PLAYER`.
    #[must_use]
    pub const fn for_player(color: Color, ordinal: u8) -> Self {
        assert!((ordinal as usize) < PIECES_PER_PLAYER, "piece ordinal out of range");
        Self((color.index() * PIECES_PER_PLAYER) as u8 + ordinal)
    }

    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this id refers to a piece in the arena.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < PIECE_COUNT
    }

    /// The owning player.
    #[must_use]
    pub const fn owner(self) -> Color {
        if self.index() < PIECES_PER_PLAYER {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Position within the owner's set of seven.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        (self.index() % PIECES_PER_PLAYER) as u8
    }

    /// Display glyph (`'?'` for ids outside the arena).
    #[must_use]
    pub fn glyph(self) -> char {
        if !self.is_valid() {
            return '?';
        }
        let table = match self.owner() {
            Color::White => &WHITE_GLYPHS,
            Color::Black => &BLACK_GLYPHS,
        };
        table[self.ordinal() as usize]
    }

    /// Look up a piece by its display glyph (case-insensitive for letters).
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        let glyph = glyph.to_ascii_uppercase();
        if let Some(i) = WHITE_GLYPHS.iter().position(|&g| g == glyph) {
            return Some(Self::for_player(Color::White, i as u8));
        }
        BLACK_GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(|i| Self::for_player(Color::Black, i as u8))
    }

    /// Iterate over every piece in arena order.
    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..PIECE_COUNT as u8).map(PieceId)
    }

    /// Iterate over one player's pieces in ordinal order.
    pub fn all_for(color: Color) -> impl Iterator<Item = PieceId> {
        (0..PIECES_PER_PLAYER as u8).map(move |i| Self::for_player(color, i))
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(PieceId::for_player(Color::White, 0), PieceId(0));
        assert_eq!(PieceId::for_player(Color::White, 6), PieceId(6));
        assert_eq!(PieceId::for_player(Color::Black, 0), PieceId(7));
        assert_eq!(PieceId::for_player(Color::Black, 6), PieceId(13));
    }

    #[test]
    fn test_owner_and_ordinal() {
        let p = PieceId(9);
        assert_eq!(p.owner(), Color::Black);
        assert_eq!(p.ordinal(), 2);
        assert_eq!(p.glyph(), '3');
    }

    #[test]
    fn test_glyph_round_trip() {
        for id in PieceId::all() {
            assert_eq!(PieceId::from_glyph(id.glyph()), Some(id));
        }
        assert_eq!(PieceId::from_glyph('d'), Some(PieceId(3)));
        assert_eq!(PieceId::from_glyph('Z'), None);
    }

    #[test]
    fn test_invalid_id() {
        assert!(!PieceId(14).is_valid());
        assert_eq!(PieceId(200).glyph(), '?');
    }

    #[test]
    fn test_all_for() {
        let black: Vec<_> = PieceId::all_for(Color::Black).collect();
        assert_eq!(black.len(), PIECES_PER_PLAYER);
        assert!(black.iter().all(|p| p.owner() == Color::Black));
    }

    #[test]
    #[should_panic(expected = "piece ordinal out of range")]
    fn test_ordinal_out_of_range() {
        let _ = PieceId::for_player(Color::White, 7);
    }

    #[test]
    fn test_serialization() {
        let id = PieceId(11);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: PieceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
