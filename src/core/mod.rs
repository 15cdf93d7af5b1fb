//! Core engine types: players, piece ids, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the move engine and
//! the strategies. Nothing here knows the rules of the game.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{PieceId, PIECES_PER_PLAYER, PIECE_COUNT, STARTING_ACTIVE};
pub use player::{Color, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, StrategyKind};
pub use error::{ConfigError, HistoryError, MoveError};
