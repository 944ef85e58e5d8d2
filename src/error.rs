//! Error types for Karnaugh map operations.

use std::fmt;

use crate::types::Coord;

/// Errors raised by [`KarnaughMap`][crate::kmap::KarnaughMap] construction and cell access.
///
/// Rejected cell values on mutation are *not* errors: setters report them with a `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KmapError {
    /// The map was requested with a variable count outside `2..=6`.
    InvalidArity {
        /// The requested number of variables
        variable_count: u32,
    },
    /// A coordinate lies outside the grid.
    OutOfBounds {
        /// The offending coordinate
        coord: Coord,
        /// Grid height
        height: usize,
        /// Grid width
        width: usize,
    },
    /// A truth-table value does not fit into `variable_count` bits.
    ValueOutOfRange {
        /// The rejected value
        value: u32,
        /// Number of variables of the map
        variable_count: u32,
    },
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::InvalidArity { variable_count } => write!(
                f,
                "Invalid number of variables {} (valid range: {}..={})",
                variable_count,
                crate::kmap::MIN_VARIABLES,
                crate::kmap::MAX_VARIABLES
            ),
            KmapError::OutOfBounds { coord, height, width } => write!(
                f,
                "Coordinate {} out of bounds for {}x{} grid",
                coord, height, width
            ),
            KmapError::ValueOutOfRange { value, variable_count } => write!(
                f,
                "Value {} out of range for {} variables (valid range: 0..{})",
                value,
                variable_count,
                1u32 << variable_count
            ),
        }
    }
}

impl std::error::Error for KmapError {}
