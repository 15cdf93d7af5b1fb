//! The three timelines.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the three linearly ordered eras.
///
/// Temporal adjacency is Past <-> Present <-> Future, with no wraparound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Era {
    /// Earliest era.
    Past,
    /// Middle era.
    Present,
    /// Latest era.
    Future,
}

impl Era {
    /// All eras, earliest first.
    pub const ALL: [Era; 3] = [Era::Past, Era::Present, Era::Future];

    /// Index in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Era::Past => 0,
            Era::Present => 1,
            Era::Future => 2,
        }
    }

    /// The next later era, if any.
    #[must_use]
    pub const fn forward(self) -> Option<Era> {
        match self {
            Era::Past => Some(Era::Present),
            Era::Present => Some(Era::Future),
            Era::Future => None,
        }
    }

    /// The next earlier era, if any.
    #[must_use]
    pub const fn backward(self) -> Option<Era> {
        match self {
            Era::Past => None,
            Era::Present => Some(Era::Past),
            Era::Future => Some(Era::Present),
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Era::Past => "past",
            Era::Present => "present",
            Era::Future => "future",
        }
    }

    /// The other two eras, earliest first.
    pub fn others(self) -> impl Iterator<Item = Era> {
        Era::ALL.into_iter().filter(move |&e| e != self)
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an era name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown era '{_0}'")]
pub struct ParseEraError(#[error(not(source))] pub String);

impl FromStr for Era {
    type Err = ParseEraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "past" => Ok(Era::Past),
            "present" => Ok(Era::Present),
            "future" => Ok(Era::Future),
            other => Err(ParseEraError(other.to_string())),
        }
    }
}
