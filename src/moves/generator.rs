//! Legal move enumeration.
//!
//! Candidate step sequences are played out on scratch copies of the board
//! with the executor's own step function, so the second step of a pair is
//! judged against the board the first step left behind (pushes and
//! duplication included). Anything this module emits therefore passes
//! [`validate`](super::executor::validate).
//!
//! ## Fallback
//!
//! When the player has no piece move at all, the only legal moves are
//! focus changes, one per era other than the current focus.

use smallvec::SmallVec;
use tracing::trace;

use super::descriptor::{MoveDescriptor, Step, MAX_STEPS};
use super::executor::{apply_step, check_piece, check_sequence, MoveEffects};
use crate::board::Board;
use crate::core::{Color, PieceId};

/// Step sequence for one piece.
pub type StepSequence = SmallVec<[Step; MAX_STEPS]>;

/// Every one- and two-step sequence `piece` can legally make right now.
///
/// Empty when the piece is not the side to move's, is outside focus, or is
/// surrounded.
#[must_use]
pub fn step_sequences(board: &Board, piece: PieceId) -> Vec<StepSequence> {
    let mover = board.to_move();
    if piece.owner() != mover || check_piece(board, piece, mover).is_err() {
        return Vec::new();
    }

    let mut sequences = Vec::new();
    let mut scratch_effects = MoveEffects::default();

    for first in Step::ALL {
        let mut after_first = board.clone();
        if apply_step(&mut after_first, piece, first, &mut scratch_effects).is_err() {
            continue;
        }
        sequences.push(SmallVec::from_slice(&[first]));

        for second in Step::ALL {
            if check_sequence(&[first, second]).is_err() {
                continue;
            }
            let mut after_second = after_first.clone();
            if apply_step(&mut after_second, piece, second, &mut scratch_effects).is_ok() {
                sequences.push(SmallVec::from_slice(&[first, second]));
            }
        }
    }

    sequences
}

/// Every legal move of one piece, crossed with each allowed focus change.
#[must_use]
pub fn moves_for_piece(board: &Board, piece: PieceId) -> Vec<MoveDescriptor> {
    let mover = board.to_move();
    let focus = board.focus(mover);
    let sequences = step_sequences(board, piece);

    let mut moves = Vec::with_capacity(sequences.len() * 2);
    for steps in &sequences {
        for next_era in focus.others() {
            moves.push(MoveDescriptor::new(piece, steps, next_era, mover.opponent()));
        }
    }
    moves
}

/// Every legal piece move for `color`, without the focus-only fallback.
#[must_use]
pub fn piece_moves(board: &Board, color: Color) -> Vec<MoveDescriptor> {
    if color != board.to_move() {
        return Vec::new();
    }
    board
        .pieces_in_era(board.focus(color), Some(color))
        .flat_map(|piece| moves_for_piece(board, piece))
        .collect()
}

/// Check if `color` has at least one piece move.
#[must_use]
pub fn has_piece_moves(board: &Board, color: Color) -> bool {
    if color != board.to_move() {
        return false;
    }
    board
        .pieces_in_era(board.focus(color), Some(color))
        .any(|piece| !step_sequences(board, piece).is_empty())
}

/// All legal moves for `color`.
///
/// Empty if it is not `color`'s turn. Otherwise never empty: a player with
/// no piece move gets the focus-only moves.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<MoveDescriptor> {
    if color != board.to_move() {
        return Vec::new();
    }

    let moves = piece_moves(board, color);
    if !moves.is_empty() {
        trace!(%color, count = moves.len(), "generated piece moves");
        return moves;
    }

    trace!(%color, "no piece moves, offering focus changes");
    board
        .focus(color)
        .others()
        .map(|era| MoveDescriptor::focus_only(era, color.opponent()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Era, Position};
    use crate::moves::executor::validate;

    fn glyph(c: char) -> PieceId {
        PieceId::from_glyph(c).unwrap()
    }

    fn pos(era: Era, x: u8, y: u8) -> Position {
        Position::at(era, x, y).unwrap()
    }

    fn has(seqs: &[StepSequence], steps: &[Step]) -> bool {
        seqs.iter().any(|s| s.as_slice() == steps)
    }

    #[test]
    fn test_opening_sequences_for_a() {
        let board = Board::new();
        let seqs = step_sequences(&board, glyph('A'));

        // Corner at (3,3) in the Past: north or west first.
        assert!(has(&seqs, &[Step::North]));
        assert!(has(&seqs, &[Step::West]));
        assert!(!has(&seqs, &[Step::East]));
        assert!(!has(&seqs, &[Step::South]));
        // No earlier era, and the Present copy of the cell holds B.
        assert!(!has(&seqs, &[Step::Backward]));
        assert!(!has(&seqs, &[Step::Forward]));
        // Step back onto the origin.
        assert!(has(&seqs, &[Step::North, Step::South]));
        assert!(has(&seqs, &[Step::North, Step::Forward]));
    }

    #[test]
    fn test_opening_move_count() {
        let board = Board::new();
        let moves = legal_moves(&board, Color::White);

        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.piece == Some(glyph('A'))));
        assert!(moves.iter().all(|m| m.next_era != Era::Past));
        assert!(moves.iter().all(|m| m.next_player == Color::Black));
        assert_eq!(moves.len(), step_sequences(&board, glyph('A')).len() * 2);
    }

    #[test]
    fn test_not_your_turn_is_empty() {
        let board = Board::new();
        assert!(legal_moves(&board, Color::Black).is_empty());
        assert!(!has_piece_moves(&board, Color::Black));
        assert!(step_sequences(&board, glyph('1')).is_empty());
    }

    #[test]
    fn test_generated_moves_validate() {
        let board = Board::new();
        for mv in legal_moves(&board, Color::White) {
            assert_eq!(validate(&board, &mv), Ok(()), "{mv}");
        }
    }

    #[test]
    fn test_second_step_sees_duplication() {
        // Backward then forward would land on the copy left behind.
        let mut board = Board::empty();
        board.deploy(Color::White, pos(Era::Present, 1, 1));
        board.deploy(Color::Black, pos(Era::Future, 3, 3));
        board.set_focus(Color::White, Era::Present);

        let a = glyph('A');
        let seqs = step_sequences(&board, a);
        assert!(has(&seqs, &[Step::Backward]));
        assert!(!has(&seqs, &[Step::Backward, Step::Forward]));
        assert!(has(&seqs, &[Step::Forward, Step::Backward]));
    }

    #[test]
    fn test_focus_only_fallback() {
        // White's only piece is in the Future while focus is Past.
        let mut board = Board::empty();
        board.deploy(Color::White, pos(Era::Future, 0, 0));
        board.deploy(Color::Black, pos(Era::Present, 3, 3));

        let moves = legal_moves(&board, Color::White);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(MoveDescriptor::is_focus_only));
        let eras: Vec<Era> = moves.iter().map(|m| m.next_era).collect();
        assert_eq!(eras, vec![Era::Present, Era::Future]);
        for mv in &moves {
            assert_eq!(validate(&board, mv), Ok(()));
        }
    }

    #[test]
    fn test_surrounded_piece_has_no_moves() {
        let mut board = Board::empty();
        board.deploy(Color::White, pos(Era::Past, 0, 0));
        board.deploy(Color::White, pos(Era::Past, 1, 0));
        board.deploy(Color::White, pos(Era::Past, 0, 1));
        board.deploy(Color::Black, pos(Era::Future, 3, 3));

        assert!(step_sequences(&board, glyph('A')).is_empty());
        assert!(!step_sequences(&board, glyph('B')).is_empty());
    }
}
