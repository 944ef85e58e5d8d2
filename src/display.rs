//! Plain-text dump of a map, for logs and terminal demos.
//!
//! ```text
//! a\bc 00 01 11 10
//!    0  .  1  .  .
//!    1  .  5  7  .
//! ```

use std::fmt;

use crate::kmap::KarnaughMap;
use crate::types::{Cell, Coord};

/// How cell values are written.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum CellFormat {
    /// Values in base 10.
    #[default]
    Decimal,
    /// Values as zero-padded binary, one digit per variable.
    Binary,
}

impl CellFormat {
    /// Renders `cell` of an `n`-variable map; empty cells are `.`.
    pub fn format(self, cell: Cell, variable_count: u32) -> String {
        match (self, cell) {
            (_, Cell::Empty) => ".".to_string(),
            (CellFormat::Decimal, Cell::Filled(v)) => v.to_string(),
            (CellFormat::Binary, Cell::Filled(v)) => {
                format!("{:0width$b}", v, width = variable_count as usize)
            }
        }
    }
}

impl KarnaughMap {
    /// The grid as a text table with Gray-code headers.
    pub fn to_table_string(&self, format: CellFormat) -> String {
        let n = self.variable_count();
        let corner = self.corner_label();
        let row_labels = self.row_labels();
        let col_labels = self.col_labels();

        let cells: Vec<Vec<String>> = (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| format.format(self[Coord::new(row, col)], n))
                    .collect()
            })
            .collect();

        let cell_width = cells
            .iter()
            .flatten()
            .map(|s| s.len())
            .chain(col_labels.iter().map(|s| s.len()))
            .max()
            .unwrap_or(1);
        let head_width = corner.len().max(row_labels.iter().map(|s| s.len()).max().unwrap_or(0));

        let mut out = String::new();
        out.push_str(&format!("{:>w$}", corner, w = head_width));
        for label in &col_labels {
            out.push_str(&format!(" {:>w$}", label, w = cell_width));
        }
        for (label, row) in row_labels.iter().zip(&cells) {
            out.push('\n');
            out.push_str(&format!("{:>w$}", label, w = head_width));
            for cell in row {
                out.push_str(&format!(" {:>w$}", cell, w = cell_width));
            }
        }
        out
    }
}

impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table_string(CellFormat::Decimal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_format() {
        assert_eq!(CellFormat::Decimal.format(Cell::Filled(5), 4), "5");
        assert_eq!(CellFormat::Binary.format(Cell::Filled(5), 4), "0101");
        assert_eq!(CellFormat::Binary.format(Cell::Empty, 4), ".");
        assert_eq!(CellFormat::default(), CellFormat::Decimal);
    }

    #[test]
    fn test_table_decimal() {
        let map = KarnaughMap::from_minterms(3, [1, 5, 7]).unwrap();
        let expected = "\
a\\bc 00 01 11 10
   0  .  1  .  .
   1  .  5  7  .";
        assert_eq!(map.to_string(), expected);
    }

    #[test]
    fn test_table_binary() {
        let map = KarnaughMap::from_minterms(2, [0, 3]).unwrap();
        let expected = "\
a\\b  0  1
  0 00  .
  1  . 11";
        assert_eq!(map.to_table_string(CellFormat::Binary), expected);
    }
}
