//! Move validation and execution.
//!
//! Every descriptor is re-checked from scratch, whoever produced it. The
//! move is played out step by step on a private copy of the board; the copy
//! replaces the caller's board only if every step succeeds, so a rejected
//! move never leaves a partial mutation behind.
//!
//! ## Step rules
//!
//! - **Spatial into an empty space**: the piece moves.
//! - **Spatial into an opponent**: the contiguous run of occupied spaces
//!   starting there is pushed one space along the step. If the run reaches
//!   the edge, its outermost piece is removed from play.
//! - **Spatial into a friendly piece**: paradox, rejected.
//! - **Temporal**: same cell, adjacent era; the destination must be empty.
//!   Stepping backward leaves the next supply piece (if any) on the space
//!   just vacated. Two temporal steps in one move must go opposite ways.
//!
//! A move without a piece only changes focus, and is legal only when the
//! mover has no piece move at all.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use super::descriptor::{MoveDescriptor, Step, MAX_STEPS};
use super::generator::has_piece_moves;
use crate::board::{Board, Position};
use crate::core::{Color, MoveError, PieceId};

/// Side effects of a move beyond relocating the mover.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEffects {
    /// Pieces shifted by push chains, outermost first.
    pub pushed: SmallVec<[PieceId; 4]>,
    /// Pieces pushed off the board and removed from play.
    pub captured: SmallVec<[PieceId; 2]>,
    /// Supply pieces brought into play by backward travel.
    pub activated: SmallVec<[PieceId; 2]>,
}

impl MoveEffects {
    /// Check if the move did nothing beyond moving the mover.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.pushed.is_empty() && self.captured.is_empty() && self.activated.is_empty()
    }
}

/// Check a move without touching the board.
pub fn validate(board: &Board, mv: &MoveDescriptor) -> Result<(), MoveError> {
    execute(board, mv).map(|_| ())
}

/// Check if a move is legal on this board.
#[must_use]
pub fn is_legal(board: &Board, mv: &MoveDescriptor) -> bool {
    validate(board, mv).is_ok()
}

/// Play a move on a copy of `board` and return the resulting board.
///
/// The input board is never modified.
#[instrument(level = "debug", skip(board, mv), fields(mv = %mv))]
pub fn execute(board: &Board, mv: &MoveDescriptor) -> Result<(Board, MoveEffects), MoveError> {
    let mover = check_turn(board, mv)?;

    let mut next = board.clone();
    let mut effects = MoveEffects::default();

    match mv.piece {
        None => {
            if !mv.steps.is_empty() {
                return Err(MoveError::MalformedSteps(mv.steps.len()));
            }
            if has_piece_moves(board, mover) {
                return Err(MoveError::MustMovePiece);
            }
        }
        Some(piece) => {
            if mv.steps.is_empty() || mv.steps.len() > MAX_STEPS {
                return Err(MoveError::MalformedSteps(mv.steps.len()));
            }
            check_sequence(&mv.steps)?;
            check_piece(board, piece, mover)?;
            for &step in &mv.steps {
                apply_step(&mut next, piece, step, &mut effects)?;
            }
        }
    }

    next.set_focus(mover, mv.next_era);
    next.set_to_move(mv.next_player);

    debug!(
        pushed = effects.pushed.len(),
        captured = effects.captured.len(),
        activated = effects.activated.len(),
        "move executed"
    );
    Ok((next, effects))
}

/// Play a move in place. On error `board` is unchanged.
pub fn apply(board: &mut Board, mv: &MoveDescriptor) -> Result<MoveEffects, MoveError> {
    let (next, effects) = execute(board, mv)?;
    *board = next;
    Ok(effects)
}

/// Check that the descriptor's turn handoff and focus change are well formed.
/// Returns the mover.
fn check_turn(board: &Board, mv: &MoveDescriptor) -> Result<Color, MoveError> {
    let mover = board.to_move();
    if mv.next_player != mover.opponent() {
        return Err(MoveError::NotYourTurn {
            expected: mover,
            found: mv.mover(),
        });
    }
    if mv.next_era == board.focus(mover) {
        return Err(MoveError::FocusUnchanged(mv.next_era));
    }
    Ok(mover)
}

/// Check that `mover` may pick up `piece` this turn. Returns its position.
pub(crate) fn check_piece(board: &Board, piece: PieceId, mover: Color) -> Result<Position, MoveError> {
    if board.piece(piece).is_none() {
        return Err(MoveError::UnknownPiece(piece));
    }
    if piece.owner() != mover {
        return Err(MoveError::NotYourPiece(piece));
    }
    let pos = board
        .position_of(piece)
        .ok_or(MoveError::PieceNotInPlay(piece))?;
    let focus = board.focus(mover);
    if pos.era != focus {
        return Err(MoveError::OutOfFocus {
            piece,
            era: pos.era,
            focus,
        });
    }
    if is_surrounded_by_friends(board, pos) {
        return Err(MoveError::Immobile(piece));
    }
    Ok(pos)
}

/// Check the shape of a step sequence: no two temporal steps the same way.
pub(crate) fn check_sequence(steps: &[Step]) -> Result<(), MoveError> {
    match steps {
        [first, second] if first.is_temporal() && first == second => {
            Err(MoveError::RepeatedTravel(*second))
        }
        _ => Ok(()),
    }
}

/// Check if every in-bounds cardinal neighbour of an occupied space holds a
/// piece of the same owner.
#[must_use]
pub fn is_surrounded_by_friends(board: &Board, pos: Position) -> bool {
    let Some(owner) = board.owner_at(pos) else {
        return false;
    };
    pos.coord
        .neighbors()
        .all(|c| board.owner_at(Position::new(pos.era, c)) == Some(owner))
}

/// Apply one step of `piece`, checking it against the board as it stands.
pub(crate) fn apply_step(
    board: &mut Board,
    piece: PieceId,
    step: Step,
    effects: &mut MoveEffects,
) -> Result<(), MoveError> {
    let from = board
        .position_of(piece)
        .ok_or(MoveError::PieceNotInPlay(piece))?;

    if step.is_temporal() {
        temporal_step(board, piece, from, step, effects)
    } else {
        spatial_step(board, piece, from, step, effects)
    }
}

fn spatial_step(
    board: &mut Board,
    piece: PieceId,
    from: Position,
    step: Step,
    effects: &mut MoveEffects,
) -> Result<(), MoveError> {
    let coord = step.shift(from.coord).ok_or(MoveError::OffBoard(from))?;
    let to = Position::new(from.era, coord);

    match board.occupant(to) {
        None => {}
        Some(other) if other.owner() == piece.owner() => return Err(MoveError::Paradox(to)),
        Some(_) => push_chain(board, to, step, effects),
    }

    board.relocate(from, to);
    Ok(())
}

/// Clear `start` by shifting the contiguous run of pieces beginning there.
///
/// Confined to `start.era`. If the run reaches the edge, the outermost piece
/// is removed from play and the rest shift into the freed spaces.
fn push_chain(board: &mut Board, start: Position, step: Step, effects: &mut MoveEffects) {
    let mut chain: SmallVec<[Position; 4]> = SmallVec::new();
    chain.push(start);

    let mut cursor = start;
    let reached_empty = loop {
        let Some(coord) = step.shift(cursor.coord) else {
            break false;
        };
        cursor = Position::new(start.era, coord);
        if !board.is_occupied(cursor) {
            break true;
        }
        chain.push(cursor);
    };

    if !reached_empty {
        if let Some(edge) = chain.pop() {
            if let Some(victim) = board.occupant(edge) {
                debug!(piece = %victim, at = %edge, "pushed off the board");
                board.remove_from_play(victim);
                effects.captured.push(victim);
            }
        }
    }

    for &pos in chain.iter().rev() {
        if let Some(coord) = step.shift(pos.coord) {
            let id = board.relocate(pos, Position::new(pos.era, coord));
            trace!(piece = %id, from = %pos, "pushed");
            effects.pushed.push(id);
        }
    }
}

fn temporal_step(
    board: &mut Board,
    piece: PieceId,
    from: Position,
    step: Step,
    effects: &mut MoveEffects,
) -> Result<(), MoveError> {
    let era = step.travel(from.era).ok_or(MoveError::NoSuchEra(from.era))?;
    let to = from.in_era(era);
    if board.is_occupied(to) {
        return Err(MoveError::TemporalBlocked(to));
    }

    board.clear(from);
    if step == Step::Backward {
        if let Some(copy) = board.activate_next(piece.owner(), from) {
            trace!(piece = %copy, at = %from, "left behind by backward travel");
            effects.activated.push(copy);
        }
    }
    board.place(piece, to);
    Ok(())
}
