//! Error taxonomy.
//!
//! - [`MoveError`]: an illegal move. The commit is rejected, the board is
//!   untouched, and the caller decides whether to retry.
//! - [`HistoryError`]: undo/redo past the ends of history, or history is off.
//! - [`ConfigError`]: an unrecognized configuration word.
//!
//! Structural invariant violations are not represented here: they are
//! programming errors and panic.

use derive_more::{Display, Error};

use super::entity::PieceId;
use super::player::Color;
use crate::board::{Era, Position};
use crate::moves::Step;

/// Why a proposed move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already reached a terminal state.
    #[display("game is already over")]
    GameOver,

    /// The descriptor hands the turn to the player who is supposed to move.
    #[display("it is {expected}'s turn, not {found}'s")]
    NotYourTurn {
        /// Player whose turn it is.
        expected: Color,
        /// Player the descriptor implies is moving.
        found: Color,
    },

    /// The next focus era equals the mover's current focus era.
    #[display("focus must move away from {_0}")]
    FocusUnchanged(#[error(not(source))] Era),

    /// A focus-only move while the mover still has a piece move.
    #[display("a piece must move when one can")]
    MustMovePiece,

    /// Two temporal steps in the same direction.
    #[display("cannot take two '{_0}' steps in a row")]
    RepeatedTravel(#[error(not(source))] Step),

    /// Wrong number of steps for the kind of move.
    #[display("a move needs 1-2 steps with a piece and none without, got {_0}")]
    MalformedSteps(#[error(not(source))] usize),

    /// The piece id is not part of the game.
    #[display("no such piece {_0}")]
    UnknownPiece(#[error(not(source))] PieceId),

    /// The piece belongs to the other player.
    #[display("piece {_0} does not belong to the mover")]
    NotYourPiece(#[error(not(source))] PieceId),

    /// The piece is in supply or has been captured.
    #[display("piece {_0} is not on the board")]
    PieceNotInPlay(#[error(not(source))] PieceId),

    /// The piece is outside the mover's focus era.
    #[display("piece {piece} is in {era}, but focus is {focus}")]
    OutOfFocus {
        /// The piece.
        piece: PieceId,
        /// Era it sits in.
        era: Era,
        /// Mover's focus era.
        focus: Era,
    },

    /// Every in-bounds neighbour holds a friendly piece.
    #[display("piece {_0} is surrounded by friendly pieces")]
    Immobile(#[error(not(source))] PieceId),

    /// A spatial step would leave the grid.
    #[display("step from {_0} leaves the board")]
    OffBoard(#[error(not(source))] Position),

    /// A temporal step past the first or last era.
    #[display("no era to step into from {_0}")]
    NoSuchEra(#[error(not(source))] Era),

    /// A step would put two of the mover's pieces on one space.
    #[display("paradox at {_0}: space holds a friendly piece")]
    Paradox(#[error(not(source))] Position),

    /// A temporal step into an occupied space.
    #[display("cannot travel into occupied {_0}")]
    TemporalBlocked(#[error(not(source))] Position),
}

/// Undo/redo could not move the history cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Undo/redo is turned off for this game.
    #[display("undo/redo is disabled")]
    Disabled,
    /// Already at the first snapshot.
    #[display("cannot undo at first turn")]
    AtEarliest,
    /// Already at the newest snapshot.
    #[display("cannot redo at latest turn")]
    AtLatest,
}

/// Unrecognized configuration word.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Not one of `human`, `heuristic`, `random`.
    #[display("invalid player type '{_0}'. Must be 'human', 'heuristic', or 'random'")]
    UnknownStrategy(#[error(not(source))] String),
    /// Not `on` or `off`.
    #[display("invalid toggle '{_0}'. Must be 'on' or 'off'")]
    UnknownToggle(#[error(not(source))] String),
    /// Not `white` or `black`.
    #[display("invalid color '{_0}'")]
    UnknownColor(#[error(not(source))] String),
}
