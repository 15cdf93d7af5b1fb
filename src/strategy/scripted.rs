//! Strategy that replays a fixed list of moves.

use std::collections::VecDeque;

use super::Strategy;
use crate::board::Board;
use crate::moves::MoveDescriptor;

/// Hands out queued moves in order, legal or not, then `None`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedStrategy {
    queue: VecDeque<MoveDescriptor>,
}

impl ScriptedStrategy {
    /// Create from moves in play order.
    pub fn new(moves: impl IntoIterator<Item = MoveDescriptor>) -> Self {
        Self {
            queue: moves.into_iter().collect(),
        }
    }

    /// Queue another move at the end.
    pub fn push(&mut self, mv: MoveDescriptor) {
        self.queue.push_back(mv);
    }

    /// Moves not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Strategy for ScriptedStrategy {
    fn name(&self) -> &str {
        "scripted"
    }

    fn get_move(&mut self, _board: &Board) -> Option<MoveDescriptor> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Era;
    use crate::core::Color;

    #[test]
    fn test_replays_then_exhausts() {
        let board = Board::new();
        let first = MoveDescriptor::focus_only(Era::Present, Color::Black);
        let second = MoveDescriptor::focus_only(Era::Past, Color::White);
        let mut script = ScriptedStrategy::new([first.clone()]);
        script.push(second.clone());

        assert_eq!(script.remaining(), 2);
        assert_eq!(script.get_move(&board), Some(first));
        assert_eq!(script.get_move(&board), Some(second));
        assert_eq!(script.get_move(&board), None);
    }
}
