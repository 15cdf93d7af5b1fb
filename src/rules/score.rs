//! Score summary shown alongside the board when scoring is on.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::win::presence;
use crate::board::{Board, Era};
use crate::core::Color;

/// Material and positional figures for one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(
    "{color}'s score: {eras} eras, {advantage} advantage, {supply} supply, {centrality} centrality, {in_focus} in focus"
)]
pub struct ScoreSummary {
    /// Player summarized.
    pub color: Color,
    /// Eras with at least one active piece.
    pub eras: usize,
    /// Own active pieces minus the opponent's.
    pub advantage: i32,
    /// Pieces still in supply.
    pub supply: usize,
    /// Own active pieces on the central four cells, over all eras.
    pub centrality: usize,
    /// Own active pieces in the focus era.
    pub in_focus: usize,
}

/// Summarize `color`'s standing on `board`.
#[must_use]
pub fn summarize(board: &Board, color: Color) -> ScoreSummary {
    let own = board.player(color);
    let theirs = board.player(color.opponent());

    let centrality = Era::ALL
        .into_iter()
        .flat_map(|era| board.pieces_in_era(era, Some(color)))
        .filter_map(|id| board.position_of(id))
        .filter(|pos| pos.coord.is_central())
        .count();

    ScoreSummary {
        color,
        eras: presence(board, color),
        advantage: own.active.len() as i32 - theirs.active.len() as i32,
        supply: own.supply_len(),
        centrality,
        in_focus: board.count_in_era(own.focus, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::core::PieceId;

    #[test]
    fn test_opening_summary() {
        let board = Board::new();
        let white = summarize(&board, Color::White);

        assert_eq!(white.eras, 3);
        assert_eq!(white.advantage, 0);
        assert_eq!(white.supply, 4);
        assert_eq!(white.centrality, 0);
        assert_eq!(white.in_focus, 1);
    }

    #[test]
    fn test_advantage_and_centrality() {
        let mut board = Board::new();
        board.remove_from_play(PieceId::from_glyph('1').unwrap());
        board.activate_next(Color::White, Position::at(Era::Present, 1, 2).unwrap());

        let white = summarize(&board, Color::White);
        assert_eq!(white.advantage, 2);
        assert_eq!(white.supply, 3);
        assert_eq!(white.centrality, 1);

        let black = summarize(&board, Color::Black);
        assert_eq!(black.advantage, -2);
        assert_eq!(black.eras, 2);
    }

    #[test]
    fn test_display() {
        let summary = summarize(&Board::new(), Color::Black);
        assert_eq!(
            summary.to_string(),
            "black's score: 3 eras, 0 advantage, 4 supply, 0 centrality, 1 in focus"
        );
    }
}
