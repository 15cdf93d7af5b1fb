//! # rust-eras
//!
//! Rules engine for a two-player board game played on three parallel 4x4
//! grids, the eras Past, Present and Future.
//!
//! ## Design Principles
//!
//! 1. **Arena State**: Spaces hold piece ids and pieces hold positions.
//!    There are no live references, so a board clone is a complete,
//!    independent snapshot.
//!
//! 2. **Pure Execution**: A move is played on a copy of the board and the
//!    copy is swapped in only if every step succeeds. Simulation and
//!    commit share the same code path.
//!
//! 3. **Trust Nothing**: Every move is re-validated, whether it came from
//!    the generator, a strategy, or user input.
//!
//! ## Modules
//!
//! - `core`: Colors, piece ids, RNG, configuration, errors
//! - `board`: Eras, positions, players and the board container
//! - `moves`: Move descriptors, validation/execution, legal move generation
//! - `rules`: Win evaluation and score summaries
//! - `history`: Snapshot undo/redo
//! - `game`: Game session and match driver
//! - `strategy`: Random, heuristic and scripted move sources
//!
//! ```
//! use rust_eras::{Color, Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::new().with_undo_redo(true));
//! let mv = game.legal_moves(Color::White)[0].clone();
//! game.commit(&mv).unwrap();
//! assert_eq!(game.to_move(), Color::Black);
//!
//! game.undo().unwrap();
//! assert_eq!(game.turn(), 1);
//! ```

pub mod core;
pub mod board;
pub mod moves;
pub mod rules;
pub mod history;
pub mod game;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Color, PlayerMap, PieceId,
    GameRng, GameRngState,
    GameConfig, StrategyKind,
    ConfigError, HistoryError, MoveError,
};

pub use crate::board::{Board, Coord, Era, Position, PlayerState};

pub use crate::moves::{legal_moves, MoveDescriptor, MoveEffects, Step};

pub use crate::rules::{GameOutcome, ScoreSummary};

pub use crate::history::{History, Snapshot};

pub use crate::game::{Game, MatchReport, StopReason, TurnOutcome};

pub use crate::strategy::{
    create_ai, HeuristicStrategy, HeuristicWeights,
    RandomStrategy, ScriptedStrategy, Strategy,
};
