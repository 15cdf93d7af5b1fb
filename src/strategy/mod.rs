//! Player strategies.
//!
//! A strategy looks at the board and proposes one move for the side to
//! move. Proposals are not trusted: the session validates every descriptor
//! before committing it, whichever strategy produced it.
//!
//! ## Implementations
//!
//! - [`RandomStrategy`]: uniform over the legal moves
//! - [`HeuristicStrategy`]: one-ply search scored by [`HeuristicWeights`]
//! - [`ScriptedStrategy`]: replays a fixed list, for tests and replays
//!
//! Human input is outside the crate; a front end implements [`Strategy`]
//! over whatever input it reads.

pub mod factory;
pub mod heuristic;
pub mod random;
pub mod scripted;

pub use factory::{create_ai, create_ai_with_rng, create_players};
pub use heuristic::{HeuristicStrategy, HeuristicWeights};
pub use random::RandomStrategy;
pub use scripted::ScriptedStrategy;

use crate::board::Board;
use crate::moves::MoveDescriptor;

/// Source of moves for one player.
pub trait Strategy: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Propose a move for the side to move on `board`.
    ///
    /// `None` means the source has nothing to offer (an exhausted script, a
    /// closed input stream). The caller decides what that means for the game.
    fn get_move(&mut self, board: &Board) -> Option<MoveDescriptor>;
}
