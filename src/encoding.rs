//! Placement of truth-table rows on the grid.
//!
//! A value `v` of `n` bits is split into its `⌊n/2⌋` most significant bits (row bits) and
//! its `⌈n/2⌉` least significant bits (column bits). Each half is a Gray code, and its
//! position in the Gray sequence is the row (resp. column) of the cell:
//!
//! ```text
//! n = 4, v = 0b10_11
//!   row bits = 0b10 -> row 3    (sequence 00 01 11 10)
//!   col bits = 0b11 -> col 2
//! ```

use crate::gray::{gray_at, gray_position};
use crate::types::Coord;

/// Number of row bits (`⌊n/2⌋`) of an `n`-variable map.
pub const fn row_bits(variable_count: u32) -> u32 {
    variable_count / 2
}

/// Number of column bits (`⌈n/2⌉`) of an `n`-variable map.
pub const fn col_bits(variable_count: u32) -> u32 {
    variable_count - row_bits(variable_count)
}

/// Grid position of the truth-table row `value` in an `n`-variable map.
///
/// Only the lowest `variable_count` bits of `value` are considered.
///
/// ```
/// use kmap_rs::encoding::encode_to_coordinate;
/// use kmap_rs::types::Coord;
///
/// assert_eq!(encode_to_coordinate(0b1011, 4), Coord::new(3, 2));
/// ```
pub fn encode_to_coordinate(value: u32, variable_count: u32) -> Coord {
    let cb = col_bits(variable_count);
    let mask = (1u32 << variable_count) - 1;
    let value = value & mask;
    let row_code = value >> cb;
    let col_code = value & ((1u32 << cb) - 1);
    Coord::new(gray_position(row_code), gray_position(col_code))
}

/// Truth-table row placed at `coord` in an `n`-variable map. Inverse of [`encode_to_coordinate`].
///
/// ```
/// use kmap_rs::encoding::decode_from_coordinate;
/// use kmap_rs::types::Coord;
///
/// assert_eq!(decode_from_coordinate(Coord::new(3, 2), 4), 0b1011);
/// ```
pub fn decode_from_coordinate(coord: Coord, variable_count: u32) -> u32 {
    (gray_at(coord.row) << col_bits(variable_count)) | gray_at(coord.col)
}
