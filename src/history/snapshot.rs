//! Full-state snapshot of a game between turns.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::rules::GameOutcome;

/// Everything needed to resume a game at a turn boundary.
///
/// The board owns its piece arena and `im` sets, so a clone is a deep copy
/// as far as observers can tell, while sharing structure in memory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board, including both players' state and the side to move.
    pub board: Board,
    /// Turn number the game was on.
    pub turn: u32,
    /// Outcome at that point.
    pub outcome: GameOutcome,
}

impl Snapshot {
    /// Capture a snapshot.
    #[must_use]
    pub fn new(board: &Board, turn: u32, outcome: GameOutcome) -> Self {
        Self {
            board: board.clone(),
            turn,
            outcome,
        }
    }
}
