//! Grid coordinates and board positions.
//!
//! `x` is the column (East is +x) and `y` is the row (South is +y), both in
//! `0..GRID_SIZE`. A [`Position`] adds the era.

use serde::{Deserialize, Serialize};

use super::era::Era;

/// Width and height of every era's grid.
pub const GRID_SIZE: u8 = 4;

/// Spaces per era.
pub const CELLS_PER_ERA: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// A cell within one era's grid. Always in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Create a coordinate, or `None` if out of bounds.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Row-major index within an era.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.y as usize) * (GRID_SIZE as usize) + self.x as usize
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELLS_PER_ERA {
            let size = GRID_SIZE as usize;
            Some(Self {
                x: (index % size) as u8,
                y: (index / size) as u8,
            })
        } else {
            None
        }
    }

    /// Shift by `(dx, dy)`; `None` if that leaves the grid. No wraparound.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::new(x, y)
    }

    /// In-bounds cardinal neighbours (N, S, E, W order, skipping edges).
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        [(0, -1), (0, 1), (1, 0), (-1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// One of the four cells in the middle of the grid.
    #[must_use]
    pub const fn is_central(self) -> bool {
        let lo = GRID_SIZE / 2 - 1;
        let hi = GRID_SIZE / 2;
        self.x >= lo && self.x <= hi && self.y >= lo && self.y <= hi
    }

    /// Every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELLS_PER_ERA).filter_map(Coord::from_index)
    }
}

/// A space on the board: era plus grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Which timeline.
    pub era: Era,
    /// Where in that timeline's grid.
    pub coord: Coord,
}

impl Position {
    /// Create a position from an era and an in-bounds coordinate.
    #[must_use]
    pub const fn new(era: Era, coord: Coord) -> Self {
        Self { era, coord }
    }

    /// Create a position from raw coordinates, or `None` if out of bounds.
    #[must_use]
    pub const fn at(era: Era, x: u8, y: u8) -> Option<Self> {
        match Coord::new(x, y) {
            Some(coord) => Some(Self { era, coord }),
            None => None,
        }
    }

    /// Same cell in another era.
    #[must_use]
    pub const fn in_era(self, era: Era) -> Self {
        Self { era, coord: self.coord }
    }

    /// Column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.coord.x
    }

    /// Row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.coord.y
    }

    /// Every position on the board, era by era.
    pub fn all() -> impl Iterator<Item = Position> {
        Era::ALL
            .into_iter()
            .flat_map(|era| Coord::all().map(move |coord| Position { era, coord }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}) in {}", self.coord.x, self.coord.y, self.era)
    }
}
