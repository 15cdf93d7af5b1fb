//! Move descriptors: which piece, which steps, where focus goes, who is next.
//!
//! A descriptor is an immutable value. It says nothing about whether the
//! move is legal; the executor re-checks every descriptor it is handed.
//!
//! ## Textual form
//!
//! `<piece>,<steps>,<next-era>`, e.g. `A,n,w,present`, or the fixed phrase
//! [`FOCUS_ONLY_TEXT`] for a move that only changes focus.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::board::{Coord, Era};
use crate::core::{Color, PieceId};

/// Rendering of a focus-change-only move.
pub const FOCUS_ONLY_TEXT: &str = "focus change only";

/// Maximum steps in one move.
pub const MAX_STEPS: usize = 2;

/// One step token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    /// -y within the era.
    North,
    /// +y within the era.
    South,
    /// +x within the era.
    East,
    /// -x within the era.
    West,
    /// To the next later era, same cell.
    Forward,
    /// To the next earlier era, same cell.
    Backward,
}

impl Step {
    /// All tokens, spatial first.
    pub const ALL: [Step; 6] = [
        Step::North,
        Step::South,
        Step::East,
        Step::West,
        Step::Forward,
        Step::Backward,
    ];

    /// Does this step change era rather than cell?
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Step::Forward | Step::Backward)
    }

    /// Grid delta for spatial steps.
    #[must_use]
    pub const fn delta(self) -> Option<(i8, i8)> {
        match self {
            Step::North => Some((0, -1)),
            Step::South => Some((0, 1)),
            Step::East => Some((1, 0)),
            Step::West => Some((-1, 0)),
            Step::Forward | Step::Backward => None,
        }
    }

    /// Neighbouring cell in this direction, for spatial steps.
    #[must_use]
    pub fn shift(self, coord: Coord) -> Option<Coord> {
        let (dx, dy) = self.delta()?;
        coord.offset(dx, dy)
    }

    /// Destination era for temporal steps.
    #[must_use]
    pub const fn travel(self, era: Era) -> Option<Era> {
        match self {
            Step::Forward => era.forward(),
            Step::Backward => era.backward(),
            _ => None,
        }
    }

    /// Single-letter token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Step::North => "n",
            Step::South => "s",
            Step::East => "e",
            Step::West => "w",
            Step::Forward => "f",
            Step::Backward => "b",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when a step token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown step '{_0}'")]
pub struct ParseStepError(#[error(not(source))] pub String);

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Step::North),
            "s" | "south" => Ok(Step::South),
            "e" | "east" => Ok(Step::East),
            "w" | "west" => Ok(Step::West),
            "f" | "forward" => Ok(Step::Forward),
            "b" | "backward" => Ok(Step::Backward),
            other => Err(ParseStepError(other.to_string())),
        }
    }
}

/// A candidate or executed move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// Piece to move; `None` changes focus only.
    pub piece: Option<PieceId>,

    /// Step tokens in order (1-2 with a piece, none without).
    pub steps: SmallVec<[Step; MAX_STEPS]>,

    /// Mover's focus era after the turn.
    pub next_era: Era,

    /// Player to move after this one.
    pub next_player: Color,
}

impl MoveDescriptor {
    /// A piece move.
    #[must_use]
    pub fn new(piece: PieceId, steps: &[Step], next_era: Era, next_player: Color) -> Self {
        Self {
            piece: Some(piece),
            steps: SmallVec::from_slice(steps),
            next_era,
            next_player,
        }
    }

    /// A focus-change-only move.
    #[must_use]
    pub fn focus_only(next_era: Era, next_player: Color) -> Self {
        Self {
            piece: None,
            steps: SmallVec::new(),
            next_era,
            next_player,
        }
    }

    /// Check if no piece moves.
    #[must_use]
    pub fn is_focus_only(&self) -> bool {
        self.piece.is_none()
    }

    /// The player making this move.
    #[must_use]
    pub fn mover(&self) -> Color {
        self.next_player.opponent()
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(piece) = self.piece else {
            return f.write_str(FOCUS_ONLY_TEXT);
        };
        write!(f, "{piece}")?;
        for step in &self.steps {
            write!(f, ",{step}")?;
        }
        write!(f, ",{}", self.next_era)
    }
}
