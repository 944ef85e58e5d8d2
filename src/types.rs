//! Value types for Karnaugh map cells and their positions.
//!
//! [`Coord`] addresses a cell in the grid, and [`Cell`] is the content of a cell:
//! either empty, or filled with the encoded input combination it stands for.
use std::fmt;

/// A position in the grid, `(row, col)`.
///
/// Coordinates are ordered row-major, so a sorted set of coordinates
/// enumerates cells in the same order as a scan of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

/// Content of a single grid cell.
///
/// A filled cell holds the encoded input combination (truth-table row) in `[0, 2^n)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(u32),
}

impl Cell {
    /// Raw marker for an empty cell, as used by [`KarnaughMap::set_cell_at`][crate::kmap::KarnaughMap::set_cell_at].
    pub const EMPTY_RAW: i32 = -1;

    /// Converts a raw integer into a cell: `-1` is empty, non-negative values are filled.
    ///
    /// Returns `None` for anything below `-1`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            Cell::EMPTY_RAW => Some(Cell::Empty),
            v if v >= 0 => Some(Cell::Filled(v as u32)),
            _ => None,
        }
    }

    /// Raw integer form of the cell, `-1` when empty.
    pub fn to_raw(self) -> i32 {
        match self {
            Cell::Empty => Self::EMPTY_RAW,
            Cell::Filled(v) => v as i32,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(self) -> bool {
        !self.is_empty()
    }

    /// The stored value, if any.
    pub fn value(self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Filled(v) => Some(v),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Filled(v) => write!(f, "{}", v),
        }
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Filled(value)
    }
}

impl From<Option<u32>> for Cell {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Cell::Empty, Cell::Filled)
    }
}
