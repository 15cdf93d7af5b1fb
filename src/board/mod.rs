//! Spatial model: eras, positions, pieces, players and the board.
//!
//! This is a pure container. It answers "what stands where" and performs
//! structural edits, but knows nothing about which moves are legal; that
//! lives in `moves`.

pub mod era;
pub mod position;
pub mod piece;
pub mod player_state;
pub mod state;
pub mod invariants;

pub use era::{Era, ParseEraError};
pub use position::{Coord, Position, CELLS_PER_ERA, GRID_SIZE};
pub use piece::Piece;
pub use player_state::PlayerState;
pub use state::Board;
pub use invariants::{check_invariants, InvariantViolation};
