//! Structural invariants - sanity checks that detect engine bugs.
//!
//! These should NEVER report anything between committed moves. A violation
//! means the board was corrupted by a bug, not that a player did something
//! illegal.

use derive_more::{Display, Error};

use super::position::Position;
use super::state::Board;
use crate::core::{Color, PieceId, PIECES_PER_PLAYER};

/// Invariant violation found on a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check all structural invariants.
///
/// - Every occupied space names a piece whose recorded position is that space.
/// - Every positioned piece is held by the space it records.
/// - Each player's pieces are split exactly across supply, active and
///   out-of-play, and active means on the board.
/// - Every activated piece is active or out of play.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for pos in Position::all() {
        if let Some(id) = board.occupant(pos) {
            match board.position_of(id) {
                Some(recorded) if recorded == pos => {}
                recorded => violations.push(InvariantViolation::new(format!(
                    "{pos} holds {id}, but {id} records {recorded:?}"
                ))),
            }
        }
    }

    for piece in board.pieces() {
        if let Some(pos) = piece.position {
            if board.occupant(pos) != Some(piece.id) {
                violations.push(InvariantViolation::new(format!(
                    "{} records {pos}, but that space holds {:?}",
                    piece.id,
                    board.occupant(pos)
                )));
            }
        }
    }

    for color in Color::ALL {
        check_player(board, color, &mut violations);
    }

    violations
}

fn check_player(board: &Board, color: Color, violations: &mut Vec<InvariantViolation>) {
    let state = board.player(color);

    for id in PieceId::all_for(color) {
        let in_supply = state.supply.contains(&id);
        let active = state.active.contains(&id);
        let out = state.deactivated.contains(&id);

        let memberships = usize::from(in_supply) + usize::from(active) + usize::from(out);
        if memberships != 1 {
            violations.push(InvariantViolation::new(format!(
                "{color} piece {id} is in {memberships} of supply/active/out-of-play"
            )));
        }

        let on_board = board.position_of(id).is_some();
        if active != on_board {
            violations.push(InvariantViolation::new(format!(
                "{color} piece {id}: active={active} but on_board={on_board}"
            )));
        }

        if state.activated.contains(&id) && !(active || out) {
            violations.push(InvariantViolation::new(format!(
                "{color} piece {id} was activated but is back in supply"
            )));
        }
    }

    let total = state.supply.len() + state.active.len() + state.deactivated.len();
    if total != PIECES_PER_PLAYER {
        violations.push(InvariantViolation::new(format!(
            "{color} accounts for {total} pieces, expected {PIECES_PER_PLAYER}"
        )));
    }

    let foreign = state
        .active
        .iter()
        .chain(state.supply.iter())
        .chain(state.deactivated.iter())
        .any(|id| id.owner() != color);
    if foreign {
        violations.push(InvariantViolation::new(format!(
            "{color} piece sets contain an opponent piece"
        )));
    }
}
