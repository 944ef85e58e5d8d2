//! Adjacency groups: rectangular blocks of filled cells.

use std::collections::BTreeSet;
use std::fmt;

use crate::types::Coord;

/// A set of grid coordinates forming a toroidally contiguous, power-of-two sized block.
///
/// Two groups are equal when they hold the same coordinates, regardless of the order in
/// which those were discovered. Iteration is row-major.
///
/// A group is a snapshot: it refers to positions of the map it was computed from, and is
/// not updated when that map changes.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct AdjacencyGroup {
    cells: BTreeSet<Coord>,
}

impl AdjacencyGroup {
    /// A group of a single cell.
    pub fn singleton(coord: Coord) -> Self {
        let mut cells = BTreeSet::new();
        cells.insert(coord);
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Coordinates of the group, row-major.
    pub fn coords(&self) -> Vec<Coord> {
        self.iter().collect()
    }

    /// Whether every cell of `self` belongs to `other`.
    pub fn is_subset(&self, other: &AdjacencyGroup) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// Whether `self` is contained in `other` and smaller than it.
    pub fn is_strict_subset(&self, other: &AdjacencyGroup) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Union of two groups.
    pub fn union(&self, other: &AdjacencyGroup) -> AdjacencyGroup {
        AdjacencyGroup {
            cells: self.cells.union(&other.cells).copied().collect(),
        }
    }

    /// Number of rows and columns spanned by the group.
    pub fn extent(&self) -> (usize, usize) {
        let rows: BTreeSet<usize> = self.cells.iter().map(|c| c.row).collect();
        let cols: BTreeSet<usize> = self.cells.iter().map(|c| c.col).collect();
        (rows.len(), cols.len())
    }
}

impl FromIterator<Coord> for AdjacencyGroup {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        AdjacencyGroup {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AdjacencyGroup {
    type Item = &'a Coord;
    type IntoIter = std::collections::btree_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for AdjacencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, coord) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(coords: &[(usize, usize)]) -> AdjacencyGroup {
        coords.iter().map(|&c| Coord::from(c)).collect()
    }

    #[test]
    fn test_set_equality() {
        let a = group(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let b = group(&[(1, 1), (0, 1), (1, 0), (0, 0)]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        assert_ne!(a, group(&[(0, 0), (0, 1)]));
    }

    #[test]
    fn test_subset() {
        let big = group(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let small = group(&[(0, 1), (1, 1)]);
        assert!(small.is_subset(&big));
        assert!(small.is_strict_subset(&big));
        assert!(big.is_subset(&big));
        assert!(!big.is_strict_subset(&big));
        assert!(!big.is_subset(&small));
    }

    #[test]
    fn test_union_and_extent() {
        let a = AdjacencyGroup::singleton(Coord::new(0, 3));
        let b = AdjacencyGroup::singleton(Coord::new(0, 0));
        let ab = a.union(&b);
        assert_eq!(ab.coords(), vec![Coord::new(0, 0), Coord::new(0, 3)]);
        assert_eq!(ab.extent(), (1, 2));
        assert!(ab.contains(Coord::new(0, 3)));
        assert!(!ab.contains(Coord::new(0, 1)));
    }

    #[test]
    fn test_display() {
        let g = group(&[(1, 0), (0, 0)]);
        assert_eq!(g.to_string(), "{(0, 0), (1, 0)}");
        assert_eq!(AdjacencyGroup::default().to_string(), "{}");
        assert!(AdjacencyGroup::default().is_empty());
    }
}
