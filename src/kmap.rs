//! The Karnaugh map grid.
//!
//! A [`KarnaughMap`] over `n` variables is a `2^⌊n/2⌋ × 2^⌈n/2⌉` grid of [`Cell`]s.
//! Rows and columns follow the Gray code, so a truth-table row is placed on the grid by
//! [`set_cell_by_value`][KarnaughMap::set_cell_by_value], and edge cells are neighbours of
//! the cells on the opposite edge (see the `shift_*` operations).
//!
//! ```
//! use kmap_rs::kmap::KarnaughMap;
//! use kmap_rs::types::{Cell, Coord};
//!
//! let mut map = KarnaughMap::new(3).unwrap();
//! assert_eq!((map.height(), map.width()), (2, 4));
//!
//! assert!(map.set_cell_by_value(6));
//! assert_eq!(map.get_cell(Coord::new(1, 3)), Ok(Cell::Filled(6)));
//!
//! // Out-of-range values are rejected without touching the grid:
//! assert!(!map.set_cell_at(0, 0, 8));
//! ```

use std::fmt::{Debug, Formatter};
use std::ops::Index;

use log::debug;

use crate::encoding::{col_bits, decode_from_coordinate, encode_to_coordinate, row_bits};
use crate::error::KmapError;
use crate::gray::gray_labels;
use crate::types::{Cell, Coord};

/// Smallest supported number of variables.
pub const MIN_VARIABLES: u32 = 2;
/// Largest supported number of variables.
pub const MAX_VARIABLES: u32 = 6;

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct KarnaughMap {
    variable_count: u32,
    /// Row-major cells, `height * width` of them.
    grid: Vec<Cell>,
}

impl KarnaughMap {
    /// Creates an empty map over `variable_count` variables.
    ///
    /// Fails with [`KmapError::InvalidArity`] unless `2 <= variable_count <= 6`.
    pub fn new(variable_count: u32) -> Result<Self, KmapError> {
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&variable_count) {
            return Err(KmapError::InvalidArity { variable_count });
        }
        let size = 1usize << variable_count;
        Ok(Self {
            variable_count,
            grid: vec![Cell::Empty; size],
        })
    }

    /// Creates a map with every value of `minterms` placed at its Gray-code position.
    pub fn from_minterms(variable_count: u32, minterms: impl IntoIterator<Item = u32>) -> Result<Self, KmapError> {
        let mut map = Self::new(variable_count)?;
        for value in minterms {
            if !map.set_cell_by_value(value) {
                return Err(KmapError::ValueOutOfRange { value, variable_count });
            }
        }
        Ok(map)
    }
}

impl Default for KarnaughMap {
    fn default() -> Self {
        KarnaughMap {
            variable_count: MIN_VARIABLES,
            grid: vec![Cell::Empty; 1 << MIN_VARIABLES],
        }
    }
}

impl Debug for KarnaughMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KarnaughMap")
            .field("variables", &self.variable_count)
            .field("height", &self.height())
            .field("width", &self.width())
            .field("filled", &self.filled_count())
            .finish()
    }
}

impl KarnaughMap {
    pub fn variable_count(&self) -> u32 {
        self.variable_count
    }

    /// Number of variables encoded by the row index, `⌊n/2⌋`.
    pub fn row_bits(&self) -> u32 {
        row_bits(self.variable_count)
    }
    /// Number of variables encoded by the column index, `⌈n/2⌉`.
    pub fn col_bits(&self) -> u32 {
        col_bits(self.variable_count)
    }

    pub fn height(&self) -> usize {
        1 << self.row_bits()
    }
    pub fn width(&self) -> usize {
        1 << self.col_bits()
    }

    /// Total number of cells, `2^n`.
    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// Exclusive upper bound of cell values, `2^n`.
    pub fn value_limit(&self) -> u32 {
        1 << self.variable_count
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height() && coord.col < self.width()
    }

    fn offset(&self, coord: Coord) -> usize {
        coord.row * self.width() + coord.col
    }

    fn coord_at(&self, offset: usize) -> Coord {
        Coord::new(offset / self.width(), offset % self.width())
    }
}

// Cell access and mutation.
impl KarnaughMap {
    /// Returns the cell at `coord`, or [`KmapError::OutOfBounds`].
    pub fn get_cell(&self, coord: Coord) -> Result<Cell, KmapError> {
        if !self.contains(coord) {
            return Err(KmapError::OutOfBounds {
                coord,
                height: self.height(),
                width: self.width(),
            });
        }
        Ok(self.grid[self.offset(coord)])
    }

    /// Whether `coord` lies on the grid and holds a value.
    pub fn is_filled(&self, coord: Coord) -> bool {
        self.contains(coord) && self.grid[self.offset(coord)].is_filled()
    }

    /// Writes `cell` at `coord`.
    ///
    /// Returns `false`, leaving the grid unchanged, when `coord` is off the grid or the
    /// cell value is not below `2^n`. A value already held by another cell is moved:
    /// the previous holder is cleared, so each value appears at most once.
    pub fn set_cell(&mut self, coord: Coord, cell: Cell) -> bool {
        if !self.contains(coord) {
            debug!("set_cell: {} is outside the {}x{} grid", coord, self.height(), self.width());
            return false;
        }
        if let Cell::Filled(value) = cell {
            if value >= self.value_limit() {
                debug!("set_cell: value {} rejected for {} variables", value, self.variable_count);
                return false;
            }
            let target = self.offset(coord);
            if let Some(previous) = self.grid.iter().position(|&c| c == cell) {
                if previous != target {
                    debug!("set_cell: moving {} from {} to {}", value, self.coord_at(previous), coord);
                    self.grid[previous] = Cell::Empty;
                }
            }
        }
        let offset = self.offset(coord);
        self.grid[offset] = cell;
        true
    }

    /// Writes the raw `value` at `(row, col)`, where `-1` clears the cell.
    ///
    /// Returns `false` when `value` is outside `[-1, 2^n)` or the position is off the grid.
    pub fn set_cell_at(&mut self, row: usize, col: usize, value: i32) -> bool {
        match Cell::from_raw(value) {
            Some(cell) => self.set_cell(Coord::new(row, col), cell),
            None => {
                debug!("set_cell_at: value {} rejected", value);
                false
            }
        }
    }

    /// Empties the cell at `coord`.
    pub fn clear_cell(&mut self, coord: Coord) -> bool {
        self.set_cell(coord, Cell::Empty)
    }

    /// Places the truth-table row `value` at its Gray-code position.
    ///
    /// Returns `false` when `value >= 2^n`.
    pub fn set_cell_by_value(&mut self, value: u32) -> bool {
        if value >= self.value_limit() {
            debug!("set_cell_by_value: value {} rejected for {} variables", value, self.variable_count);
            return false;
        }
        let coord = encode_to_coordinate(value, self.variable_count);
        self.set_cell(coord, Cell::Filled(value))
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.grid.fill(Cell::Empty);
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_filled()).count()
    }

    /// Coordinates of filled cells, in row-major order.
    pub fn filled_coords(&self) -> Vec<Coord> {
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_filled())
            .map(|(i, _)| self.coord_at(i))
            .collect()
    }

    /// Values of filled cells, in row-major order.
    pub fn minterms(&self) -> Vec<u32> {
        self.grid.iter().filter_map(|c| c.value()).collect()
    }

    /// Iterates over all `(coord, cell)` pairs, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.grid.iter().enumerate().map(|(i, &c)| (self.coord_at(i), c))
    }

    /// Truth-table row that belongs at `coord`, regardless of its content.
    pub fn value_at(&self, coord: Coord) -> u32 {
        decode_from_coordinate(coord, self.variable_count)
    }
}

impl Index<Coord> for KarnaughMap {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Self::Output {
        assert!(
            self.contains(coord),
            "Coordinate {} out of bounds for {}x{} grid",
            coord,
            self.height(),
            self.width()
        );
        &self.grid[self.offset(coord)]
    }
}

// Toroidal shifts.
impl KarnaughMap {
    /// Moves `coord` up by `amount` rows, wrapping from the top row to the bottom one.
    pub fn shift_up(&self, coord: Coord, amount: usize) -> Coord {
        let h = self.height();
        Coord::new((coord.row % h + h - amount % h) % h, coord.col)
    }

    /// Moves `coord` down by `amount` rows, wrapping from the bottom row to the top one.
    pub fn shift_down(&self, coord: Coord, amount: usize) -> Coord {
        let h = self.height();
        Coord::new((coord.row % h + amount % h) % h, coord.col)
    }

    /// Moves `coord` left by `amount` columns, wrapping around.
    pub fn shift_left(&self, coord: Coord, amount: usize) -> Coord {
        let w = self.width();
        Coord::new(coord.row, (coord.col % w + w - amount % w) % w)
    }

    /// Moves `coord` right by `amount` columns, wrapping around.
    pub fn shift_right(&self, coord: Coord, amount: usize) -> Coord {
        let w = self.width();
        Coord::new(coord.row, (coord.col % w + amount % w) % w)
    }
}

// Header labels.
impl KarnaughMap {
    /// Row header labels, in Gray-code order.
    pub fn row_labels(&self) -> Vec<String> {
        gray_labels(self.row_bits())
    }

    /// Column header labels, in Gray-code order.
    pub fn col_labels(&self) -> Vec<String> {
        gray_labels(self.col_bits())
    }

    /// Corner label naming row and column variables, e.g. `ab\cd`.
    pub fn corner_label(&self) -> String {
        let mut label = String::new();
        for k in 0..self.variable_count {
            if k == self.row_bits() {
                label.push('\\');
            }
            label.push(variable_name(k as usize));
        }
        label
    }
}

/// Letter of the `index`-th variable (`a` for the most significant bit).
pub fn variable_name(index: usize) -> char {
    (b'a' + index as u8) as char
}
