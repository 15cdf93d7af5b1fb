//! The board: three eras of spaces, the piece arena, and both players.
//!
//! ## Arena layout
//!
//! Spaces store `PieceId`s and pieces store `Option<Position>`; there are no
//! live references between them, so cloning a board is a plain copy (plus
//! `im` structural sharing for the piece sets) and restoring a clone never
//! needs relinking.
//!
//! ## Contract
//!
//! The board is a container, not a referee. It never checks move legality,
//! but it does refuse to corrupt itself: placing onto an occupied space, or
//! placing a piece that is already on the board, panics.

use serde::{Deserialize, Serialize};

use super::era::Era;
use super::piece::Piece;
use super::player_state::PlayerState;
use super::position::{Position, CELLS_PER_ERA, GRID_SIZE};
use crate::core::{Color, PieceId, PlayerMap, PIECE_COUNT, STARTING_ACTIVE};

/// Complete spatial state of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Occupancy per era, row-major.
    cells: [[Option<PieceId>; CELLS_PER_ERA]; 3],

    /// Piece arena, indexed by `PieceId`.
    pieces: [Piece; PIECE_COUNT],

    /// Focus and piece sets per player.
    players: PlayerMap<PlayerState>,

    /// Player who must move next.
    to_move: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position.
    ///
    /// White's first three pieces stand on (3,3) of Past, Present and Future,
    /// Black's on (0,0). White focuses on Past, Black on Future, White moves.
    #[must_use]
    pub fn new() -> Self {
        let far = GRID_SIZE - 1;
        let home = PlayerMap::new(|color| match color {
            Color::White => (far, far),
            Color::Black => (0, 0),
        });

        let mut board = Self::empty();
        for color in Color::ALL {
            let (x, y) = home[color];
            for era in Era::ALL.into_iter().take(STARTING_ACTIVE) {
                if let Some(pos) = Position::at(era, x, y) {
                    board.deploy(color, pos);
                }
            }
        }
        board
    }

    /// A board with no pieces placed: every piece waits in its owner's supply.
    ///
    /// Focus eras and the side to move are the standard ones.
    #[must_use]
    pub fn empty() -> Self {
        let pieces = std::array::from_fn(|i| Piece::new(PieceId(i as u8)));
        let players = PlayerMap::new(|color| {
            let focus = match color {
                Color::White => Era::Past,
                Color::Black => Era::Future,
            };
            PlayerState::new(focus, PieceId::all_for(color))
        });

        Self {
            cells: [[None; CELLS_PER_ERA]; 3],
            pieces,
            players,
            to_move: Color::White,
        }
    }

    // === Queries ===

    /// Piece standing on a space.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<PieceId> {
        self.cells[pos.era.index()][pos.coord.index()]
    }

    /// Check if a space holds a piece.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.occupant(pos).is_some()
    }

    /// Owner of the piece on a space.
    #[must_use]
    pub fn owner_at(&self, pos: Position) -> Option<Color> {
        self.occupant(pos).map(PieceId::owner)
    }

    /// Look up a piece in the arena.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Current space of a piece, if it is on the board.
    #[must_use]
    pub fn position_of(&self, id: PieceId) -> Option<Position> {
        self.piece(id).and_then(|p| p.position)
    }

    /// All pieces in the arena.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Pieces standing in an era, optionally only one player's, row-major.
    pub fn pieces_in_era(&self, era: Era, owner: Option<Color>) -> impl Iterator<Item = PieceId> + '_ {
        self.cells[era.index()]
            .iter()
            .filter_map(|cell| *cell)
            .filter(move |id| owner.map_or(true, |o| id.owner() == o))
    }

    /// Count of a player's pieces standing in an era.
    #[must_use]
    pub fn count_in_era(&self, era: Era, owner: Color) -> usize {
        self.pieces_in_era(era, Some(owner)).count()
    }

    /// A player's focus and piece sets.
    #[must_use]
    pub fn player(&self, color: Color) -> &PlayerState {
        &self.players[color]
    }

    /// Era a player may currently move in.
    #[must_use]
    pub fn focus(&self, color: Color) -> Era {
        self.players[color].focus
    }

    /// Player who must move next.
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    // === Structural mutation ===

    /// Put a piece on an empty space.
    ///
    /// Panics if the space is occupied, the id is unknown, or the piece is
    /// already on the board. These are caller bugs, not game situations.
    pub fn place(&mut self, id: PieceId, pos: Position) {
        assert!(id.is_valid(), "unknown piece {id:?}");
        if let Some(existing) = self.occupant(pos) {
            panic!("cannot place {id} on {pos}: already holds {existing}");
        }
        if let Some(current) = self.pieces[id.index()].position {
            panic!("cannot place {id} on {pos}: already on {current}");
        }

        self.cells[pos.era.index()][pos.coord.index()] = Some(id);
        self.pieces[id.index()].position = Some(pos);
    }

    /// Empty a space, detaching the piece that stood there.
    pub fn clear(&mut self, pos: Position) -> Option<PieceId> {
        let id = self.cells[pos.era.index()][pos.coord.index()].take()?;
        self.pieces[id.index()].position = None;
        Some(id)
    }

    /// Move whatever stands on `from` to the empty space `to`.
    ///
    /// Panics if `from` is empty or `to` is occupied.
    pub fn relocate(&mut self, from: Position, to: Position) -> PieceId {
        let Some(id) = self.clear(from) else {
            panic!("cannot relocate from empty {from}");
        };
        self.place(id, to);
        id
    }

    // === Piece lifecycle ===

    /// Take the next supply piece into play on `pos`, without recording it
    /// as activated. Used to lay out starting positions.
    pub fn deploy(&mut self, color: Color, pos: Position) -> Option<PieceId> {
        let id = self.players[color].supply.pop_front()?;
        self.place(id, pos);
        self.players[color].active.insert(id);
        Some(id)
    }

    /// Take the next supply piece into play on `pos` and record the
    /// activation. Returns `None` (and changes nothing) if supply is empty.
    pub fn activate_next(&mut self, color: Color, pos: Position) -> Option<PieceId> {
        let id = self.deploy(color, pos)?;
        self.players[color].activated.insert(id);
        Some(id)
    }

    /// Remove a piece from the board and from play entirely.
    pub fn remove_from_play(&mut self, id: PieceId) {
        if let Some(pos) = self.position_of(id) {
            self.clear(pos);
        }
        let state = &mut self.players[id.owner()];
        state.active.remove(&id);
        state.deactivated.insert(id);
    }

    // === Turn state ===

    /// Set a player's focus era.
    pub fn set_focus(&mut self, color: Color, era: Era) {
        self.players[color].focus = era;
    }

    /// Set the player who moves next.
    pub fn set_to_move(&mut self, color: Color) {
        self.to_move = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PIECES_PER_PLAYER;

    fn pos(era: Era, x: u8, y: u8) -> Position {
        Position::at(era, x, y).unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let board = Board::new();

        assert_eq!(board.occupant(pos(Era::Past, 3, 3)), PieceId::from_glyph('A'));
        assert_eq!(board.occupant(pos(Era::Present, 3, 3)), PieceId::from_glyph('B'));
        assert_eq!(board.occupant(pos(Era::Future, 3, 3)), PieceId::from_glyph('C'));
        assert_eq!(board.occupant(pos(Era::Past, 0, 0)), PieceId::from_glyph('1'));
        assert_eq!(board.occupant(pos(Era::Future, 0, 0)), PieceId::from_glyph('3'));

        for color in Color::ALL {
            assert_eq!(board.player(color).active.len(), STARTING_ACTIVE);
            assert_eq!(board.player(color).supply_len(), PIECES_PER_PLAYER - STARTING_ACTIVE);
            assert!(board.player(color).activated.is_empty());
        }

        assert_eq!(board.focus(Color::White), Era::Past);
        assert_eq!(board.focus(Color::Black), Era::Future);
        assert_eq!(board.to_move(), Color::White);
    }

    #[test]
    fn test_supply_order() {
        let board = Board::new();
        assert_eq!(board.player(Color::White).next_in_supply(), PieceId::from_glyph('D'));
        assert_eq!(board.player(Color::Black).next_in_supply(), PieceId::from_glyph('4'));
    }

    #[test]
    fn test_pieces_in_era_filter() {
        let board = Board::new();

        assert_eq!(board.pieces_in_era(Era::Present, None).count(), 2);
        let white: Vec<_> = board.pieces_in_era(Era::Present, Some(Color::White)).collect();
        assert_eq!(white, vec![PieceId::from_glyph('B').unwrap()]);
        assert_eq!(board.count_in_era(Era::Future, Color::Black), 1);
    }

    #[test]
    fn test_place_and_clear_keep_back_reference() {
        let mut board = Board::empty();
        let id = PieceId::from_glyph('E').unwrap();
        let p = pos(Era::Present, 1, 2);

        board.place(id, p);
        assert_eq!(board.position_of(id), Some(p));
        assert_eq!(board.occupant(p), Some(id));

        assert_eq!(board.clear(p), Some(id));
        assert_eq!(board.position_of(id), None);
        assert!(!board.is_occupied(p));
        assert_eq!(board.clear(p), None);
    }

    #[test]
    #[should_panic(expected = "already holds")]
    fn test_place_on_occupied_panics() {
        let mut board = Board::new();
        board.place(PieceId::from_glyph('D').unwrap(), pos(Era::Past, 3, 3));
    }

    #[test]
    #[should_panic(expected = "already on")]
    fn test_place_twice_panics() {
        let mut board = Board::new();
        board.place(PieceId::from_glyph('A').unwrap(), pos(Era::Past, 1, 1));
    }

    #[test]
    fn test_relocate() {
        let mut board = Board::new();
        let from = pos(Era::Past, 3, 3);
        let to = pos(Era::Past, 3, 2);

        let id = board.relocate(from, to);
        assert_eq!(Some(id), PieceId::from_glyph('A'));
        assert_eq!(board.position_of(id), Some(to));
        assert!(!board.is_occupied(from));
    }

    #[test]
    fn test_activate_next_records_activation() {
        let mut board = Board::new();
        let p = pos(Era::Past, 1, 1);

        let id = board.activate_next(Color::White, p).unwrap();
        assert_eq!(id.glyph(), 'D');
        assert!(board.player(Color::White).activated.contains(&id));
        assert!(board.player(Color::White).is_active(id));
        assert_eq!(board.player(Color::White).supply_len(), 3);
    }

    #[test]
    fn test_activate_next_empty_supply() {
        let mut board = Board::empty();
        for i in 0..PIECES_PER_PLAYER as u8 {
            board.deploy(Color::Black, pos(Era::Present, i % 4, i / 4));
        }
        let before = board.clone();

        assert_eq!(board.activate_next(Color::Black, pos(Era::Past, 0, 0)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_remove_from_play() {
        let mut board = Board::new();
        let id = PieceId::from_glyph('2').unwrap();

        board.remove_from_play(id);

        assert!(!board.is_occupied(pos(Era::Present, 0, 0)));
        assert!(!board.player(Color::Black).is_active(id));
        assert!(board.player(Color::Black).is_out_of_play(id));
        assert_eq!(board.position_of(id), None);
    }

    #[test]
    fn test_serialization() {
        let board = Board::new();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
