//! Uniform random strategy.

use super::Strategy;
use crate::board::Board;
use crate::core::GameRng;
use crate::moves::{legal_moves, MoveDescriptor};

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create with a fresh RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create from an existing RNG stream.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn get_move(&mut self, board: &Board) -> Option<MoveDescriptor> {
        let moves = legal_moves(board, board.to_move());
        self.rng.choose(&moves).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::validate;

    #[test]
    fn test_random_move_is_legal() {
        let board = Board::new();
        let mut strategy = RandomStrategy::new(7);

        for _ in 0..20 {
            let mv = strategy.get_move(&board).unwrap();
            assert_eq!(validate(&board, &mv), Ok(()));
        }
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let mut a = RandomStrategy::new(99);
        let mut b = RandomStrategy::new(99);

        for _ in 0..10 {
            assert_eq!(a.get_move(&board), b.get_move(&board));
        }
    }
}
