//! Rendering of cells and groups as literal clauses.
//!
//! Variables are named by letters, `a` being the most significant bit of a cell value.
//! A cell with value `0b101` in a 3-variable map renders as `a -b c`.
//!
//! # Examples
//!
//! ```
//! use kmap_rs::clause::{render_all_clauses, render_clause, render_group};
//! use kmap_rs::kmap::KarnaughMap;
//!
//! assert_eq!(render_clause(0, 3), "-a -b -c");
//! assert_eq!(render_clause(7, 3), "a b c");
//!
//! let map = KarnaughMap::from_minterms(2, [1, 3]).unwrap();
//! assert_eq!(render_all_clauses(&map), vec!["-a b", "a b"]);
//!
//! let groups = map.adjacency_groups();
//! assert_eq!(render_group(&map, &groups[0]), "b");
//! ```

use std::fmt;

use crate::group::AdjacencyGroup;
use crate::kmap::{variable_name, KarnaughMap};

/// Characters used when rendering clauses.
///
/// ```
/// use kmap_rs::clause::{render_clause_with_style, ClauseStyle};
///
/// let style = ClauseStyle {
///     negation: "~",
///     separator: "*",
///     ..ClauseStyle::default()
/// };
/// assert_eq!(render_clause_with_style(0b10, 2, &style), "a*~b");
/// ```
#[derive(Debug, Clone)]
pub struct ClauseStyle {
    /// Prefix of a negated literal (default: "-")
    pub negation: &'static str,
    /// Separator between literals (default: " ")
    pub separator: &'static str,
    /// Rendering of a clause without literals (default: "1")
    pub empty: &'static str,
}

impl Default for ClauseStyle {
    fn default() -> Self {
        Self {
            negation: "-",
            separator: " ",
            empty: "1",
        }
    }
}

/// A variable or its negation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal {
    /// Variable index, `0` being `a`.
    pub var: usize,
    pub positive: bool,
}

impl Literal {
    pub fn pos(var: usize) -> Self {
        Literal { var, positive: true }
    }

    pub fn neg(var: usize) -> Self {
        Literal { var, positive: false }
    }

    pub fn name(&self) -> char {
        variable_name(self.var)
    }

    fn render(&self, style: &ClauseStyle) -> String {
        if self.positive {
            self.name().to_string()
        } else {
            format!("{}{}", style.negation, self.name())
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&ClauseStyle::default()))
    }
}

/// Literals of `value`, one per variable, most significant bit first.
pub fn literals(value: u32, variable_count: u32) -> Vec<Literal> {
    (0..variable_count as usize)
        .map(|k| {
            let bit = variable_count as usize - k - 1;
            Literal {
                var: k,
                positive: value & (1 << bit) != 0,
            }
        })
        .collect()
}

/// Joins literals into a clause.
pub fn join_literals(literals: &[Literal], style: &ClauseStyle) -> String {
    if literals.is_empty() {
        return style.empty.to_string();
    }
    literals
        .iter()
        .map(|lit| lit.render(style))
        .collect::<Vec<_>>()
        .join(style.separator)
}

/// Renders `value` as a clause over `variable_count` variables with the default style.
pub fn render_clause(value: u32, variable_count: u32) -> String {
    render_clause_with_style(value, variable_count, &ClauseStyle::default())
}

pub fn render_clause_with_style(value: u32, variable_count: u32, style: &ClauseStyle) -> String {
    join_literals(&literals(value, variable_count), style)
}

/// One clause per filled cell, in row-major order.
pub fn render_all_clauses(map: &KarnaughMap) -> Vec<String> {
    render_all_clauses_with_style(map, &ClauseStyle::default())
}

pub fn render_all_clauses_with_style(map: &KarnaughMap, style: &ClauseStyle) -> Vec<String> {
    map.minterms()
        .into_iter()
        .map(|value| render_clause_with_style(value, map.variable_count(), style))
        .collect()
}

/// Literals shared by every cell position of `group`.
///
/// Variables that change value inside the group are left out. Positions are decoded from
/// the grid layout, so the result describes the block itself rather than whatever values
/// the cells hold.
pub fn group_literals(map: &KarnaughMap, group: &AdjacencyGroup) -> Vec<Literal> {
    let n = map.variable_count();
    let mut coords = group.iter();
    let Some(first) = coords.next() else {
        return Vec::new();
    };
    let first = map.value_at(first);
    let mut varying = 0u32;
    for coord in coords {
        varying |= map.value_at(coord) ^ first;
    }
    literals(first, n)
        .into_iter()
        .filter(|lit| varying & (1 << (n as usize - lit.var - 1)) == 0)
        .collect()
}

/// Renders `group` as the clause of its shared literals, with the default style.
pub fn render_group(map: &KarnaughMap, group: &AdjacencyGroup) -> String {
    render_group_with_style(map, group, &ClauseStyle::default())
}

pub fn render_group_with_style(map: &KarnaughMap, group: &AdjacencyGroup, style: &ClauseStyle) -> String {
    join_literals(&group_literals(map, group), style)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::types::Coord;

    #[test]
    fn test_render_clause() {
        assert_eq!(render_clause(0, 2), "-a -b");
        assert_eq!(render_clause(1, 2), "-a b");
        assert_eq!(render_clause(2, 2), "a -b");
        assert_eq!(render_clause(3, 2), "a b");
        assert_eq!(render_clause(0, 3), "-a -b -c");
        assert_eq!(render_clause(7, 3), "a b c");
        assert_eq!(render_clause(0b100110, 6), "a -b -c d e -f");
    }

    #[test]
    fn test_render_clause_deterministic() {
        for n in 2..=6 {
            for value in 0..(1u32 << n) {
                let clause = render_clause(value, n);
                assert_eq!(clause, render_clause(value, n));
                assert_eq!(clause.split(' ').count(), n as usize);
                assert!(!clause.ends_with(' '));
            }
        }
    }

    #[test]
    fn test_extreme_values() {
        for n in 2..=6 {
            let all = render_clause((1 << n) - 1, n);
            assert!(!all.contains('-'));
            let none = render_clause(0, n);
            assert_eq!(none.matches('-').count(), n as usize);
        }
    }

    #[test]
    fn test_render_all_clauses_order() {
        let mut map = KarnaughMap::new(3).unwrap();
        assert!(map.set_cell_by_value(6)); // (1, 3)
        assert!(map.set_cell_by_value(2)); // (0, 3)
        assert!(map.set_cell_by_value(5)); // (1, 1)
        assert_eq!(render_all_clauses(&map), vec!["-a b -c", "a -b c", "a b -c"]);
        assert!(render_all_clauses(&KarnaughMap::new(3).unwrap()).is_empty());
    }

    #[test]
    fn test_render_all_clauses_uses_stored_values() {
        let mut map = KarnaughMap::new(2).unwrap();
        assert!(map.set_cell_at(0, 0, 3));
        assert_eq!(render_all_clauses(&map), vec!["a b"]);
    }

    #[test]
    fn test_style() {
        let style = ClauseStyle {
            negation: "!",
            separator: " & ",
            empty: "true",
        };
        assert_eq!(render_clause_with_style(0b01, 2, &style), "!a & b");
        assert_eq!(join_literals(&[], &style), "true");
        assert_eq!(join_literals(&[], &ClauseStyle::default()), "1");
    }

    #[test]
    fn test_literal() {
        assert_eq!(Literal::pos(0).to_string(), "a");
        assert_eq!(Literal::neg(2).to_string(), "-c");
        assert_eq!(literals(0b10, 2), vec![Literal::pos(0), Literal::neg(1)]);
    }

    #[test]
    fn test_group_literals() {
        // Row 1 of a 3-variable map: a = 1, b and c vary.
        let map = KarnaughMap::new(3).unwrap();
        let row: AdjacencyGroup = (0..4).map(|col| Coord::new(1, col)).collect();
        assert_eq!(group_literals(&map, &row), vec![Literal::pos(0)]);
        assert_eq!(render_group(&map, &row), "a");

        // Wrapped pair of columns 0 and 3: c = 0.
        let pair: AdjacencyGroup = [Coord::new(0, 0), Coord::new(0, 3)].into_iter().collect();
        assert_eq!(render_group(&map, &pair), "-a -c");

        let single = AdjacencyGroup::singleton(Coord::new(1, 2));
        assert_eq!(render_group(&map, &single), render_clause(7, 3));
    }

    #[test]
    fn test_group_covering_whole_map() {
        let map = KarnaughMap::from_minterms(4, 0..16).unwrap();
        let groups = map.adjacency_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(render_group(&map, &groups[0]), "1");
        assert_eq!(render_group(&map, &AdjacencyGroup::default()), "1");
    }

    #[test]
    fn test_group_corners() {
        let map = KarnaughMap::from_minterms(4, [0, 2, 8, 10]).unwrap();
        let groups = map.adjacency_groups();
        assert_eq!(render_group(&map, &groups[0]), "-b -d");
    }
}
