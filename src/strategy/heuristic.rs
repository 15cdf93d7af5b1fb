//! One-ply heuristic strategy.
//!
//! Each legal move is played on a scratch board through the pure executor
//! and the result is scored from the mover's point of view. A move that
//! wins outright scores above anything positional; a move that loses
//! scores below. Equal best scores are broken with the strategy's RNG.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Strategy;
use crate::board::Board;
use crate::core::{Color, GameRng};
use crate::moves::{execute, legal_moves, MoveDescriptor, MoveEffects};
use crate::rules::{evaluate, summarize};

/// Weights applied to the score summaries after a candidate move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Per era the mover is present in.
    pub eras: f64,
    /// Per era the opponent is present in (subtracted).
    pub opponent_eras: f64,
    /// Per piece of material advantage.
    pub advantage: f64,
    /// Per piece left in the mover's supply.
    pub supply: f64,
    /// Per mover piece on a central cell.
    pub centrality: f64,
    /// Per mover piece in the new focus era.
    pub in_focus: f64,
    /// Per piece shifted by the move's pushes.
    pub pushes: f64,
    /// Magnitude of a decided game.
    pub decisive: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            eras: 10.0,
            opponent_eras: 12.0,
            advantage: 4.0,
            supply: 0.5,
            centrality: 1.0,
            in_focus: 0.25,
            pushes: 0.1,
            decisive: 10_000.0,
        }
    }
}

impl HeuristicWeights {
    /// Score `board` (reached by `mover`'s move) from `mover`'s side.
    #[must_use]
    pub fn score(&self, board: &Board, mover: Color, effects: &MoveEffects) -> f64 {
        let outcome = evaluate(board, Some(mover));
        match outcome.winner() {
            Some(winner) if winner == mover => return self.decisive,
            Some(_) => return -self.decisive,
            None => {}
        }

        let own = summarize(board, mover);
        let theirs = summarize(board, mover.opponent());

        self.eras * own.eras as f64 - self.opponent_eras * theirs.eras as f64
            + self.advantage * f64::from(own.advantage)
            + self.supply * own.supply as f64
            + self.centrality * own.centrality as f64
            + self.in_focus * own.in_focus as f64
            + self.pushes * effects.pushed.len() as f64
    }
}

/// Picks the legal move whose resulting board scores best.
#[derive(Clone, Debug)]
pub struct HeuristicStrategy {
    weights: HeuristicWeights,
    rng: GameRng,
}

impl HeuristicStrategy {
    /// Create with default weights.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create from an existing RNG stream, with default weights.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            weights: HeuristicWeights::default(),
            rng,
        }
    }

    /// Replace the weights.
    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Current weights.
    #[must_use]
    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }
}

impl Strategy for HeuristicStrategy {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn get_move(&mut self, board: &Board) -> Option<MoveDescriptor> {
        let mover = board.to_move();
        let moves = legal_moves(board, mover);

        let mut best_score = f64::NEG_INFINITY;
        let mut best: Vec<usize> = Vec::new();

        for (i, mv) in moves.iter().enumerate() {
            let Ok((next, effects)) = execute(board, mv) else {
                continue;
            };
            let score = self.weights.score(&next, mover, &effects);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(i);
            } else if score == best_score {
                best.push(i);
            }
        }

        let pick = *self.rng.choose(&best)?;
        trace!(%mover, candidates = moves.len(), ties = best.len(), best_score, "heuristic choice");
        moves.into_iter().nth(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Era, Position};
    use crate::moves::{validate, Step};
    use crate::core::PieceId;

    fn pos(era: Era, x: u8, y: u8) -> Position {
        Position::at(era, x, y).unwrap()
    }

    #[test]
    fn test_opening_move_is_legal() {
        let board = Board::new();
        let mut strategy = HeuristicStrategy::new(3);

        let mv = strategy.get_move(&board).unwrap();
        assert_eq!(validate(&board, &mv), Ok(()));
    }

    #[test]
    fn test_takes_winning_push() {
        // Black is down to two eras; pushing its lone Present piece off the
        // edge wins on the spot.
        let mut board = Board::empty();
        board.deploy(Color::White, pos(Era::Present, 2, 0));
        board.deploy(Color::White, pos(Era::Past, 3, 3));
        board.deploy(Color::Black, pos(Era::Present, 3, 0));
        board.deploy(Color::Black, pos(Era::Future, 0, 3));
        board.set_focus(Color::White, Era::Present);

        let mut strategy = HeuristicStrategy::new(11);
        let mv = strategy.get_move(&board).unwrap();

        let (next, _) = execute(&board, &mv).unwrap();
        assert_eq!(evaluate(&next, Some(Color::White)).winner(), Some(Color::White));
        assert_eq!(mv.piece, PieceId::from_glyph('A'));
        assert_eq!(mv.steps.first(), Some(&Step::East));
    }

    #[test]
    fn test_weights_serde_defaults() {
        let weights: HeuristicWeights = serde_json::from_str(r#"{"eras": 2.0}"#).unwrap();
        assert_eq!(weights.eras, 2.0);
        assert_eq!(weights.advantage, HeuristicWeights::default().advantage);
    }
}
