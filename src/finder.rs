//! Discovery of maximal adjacency groups.
//!
//! Every filled cell seeds a recursive expansion. A group of cells is grown by doubling:
//! the whole group is shifted along one axis by the smallest offset that moves it clear of
//! itself, and if all cells of the shifted copy are filled, the union becomes the new group.
//! Both directions of both axes are tried, so one seed may end in several maximal groups.
//! A group that cannot grow in any direction is maximal.
//!
//! The same block is reached from many seeds and many paths, so the collected groups are
//! deduplicated at the end, and groups strictly contained in another one are dropped.
//!
//! # Example
//!
//! ```
//! use kmap_rs::finder::find_adjacency_groups;
//! use kmap_rs::kmap::KarnaughMap;
//!
//! // Corners of a 4x4 map are adjacent through the edges.
//! let map = KarnaughMap::from_minterms(4, [0, 2, 8, 10]).unwrap();
//! let groups = find_adjacency_groups(&map);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].len(), 4);
//! ```
//!
//! # Complexity
//!
//! The search is exhaustive, which is fine for maps of at most 64 cells. Expansion results
//! are cached per group for the duration of one call.

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::debug;

use crate::group::AdjacencyGroup;
use crate::kmap::KarnaughMap;
use crate::types::Coord;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

impl KarnaughMap {
    fn shift(&self, coord: Coord, direction: Direction, amount: usize) -> Coord {
        match direction {
            Direction::Up => self.shift_up(coord, amount),
            Direction::Down => self.shift_down(coord, amount),
            Direction::Left => self.shift_left(coord, amount),
            Direction::Right => self.shift_right(coord, amount),
        }
    }

    /// Smallest offset in `1..limit` moving every cell of `group` off the group, or `0`.
    fn free_offset(&self, group: &AdjacencyGroup, direction: Direction, limit: usize) -> usize {
        (1..limit)
            .find(|&amount| group.iter().all(|c| !group.contains(self.shift(c, direction, amount))))
            .unwrap_or(0)
    }

    /// All maximal adjacency groups of filled cells.
    ///
    /// See [`find_adjacency_groups`].
    pub fn adjacency_groups(&self) -> Vec<AdjacencyGroup> {
        find_adjacency_groups(self)
    }
}

/// Returns every maximal adjacency group of filled cells in `map`.
///
/// Each returned group is a power-of-two sized block of filled cells, contiguous on the
/// torus. No two groups are equal and no group is strictly contained in another.
/// Groups are listed in discovery order: seeds row-major, expansions up, down, left, right.
pub fn find_adjacency_groups(map: &KarnaughMap) -> Vec<AdjacencyGroup> {
    let seeds = map.filled_coords();
    debug!("find_adjacency_groups(map = {:?}, seeds = {})", map, seeds.len());

    let mut cache = HashMap::new();
    let mut found = Vec::new();
    for seed in seeds {
        let groups = _expand(map, &AdjacencyGroup::singleton(seed), &mut cache);
        debug!("seed {} -> {} group(s)", seed, groups.len());
        found.extend(groups);
    }

    let groups = remove_redundant(found);
    debug!("find_adjacency_groups -> {} group(s)", groups.len());
    groups
}

fn _expand(
    map: &KarnaughMap,
    group: &AdjacencyGroup,
    cache: &mut HashMap<AdjacencyGroup, Vec<AdjacencyGroup>>,
) -> Vec<AdjacencyGroup> {
    if let Some(groups) = cache.get(group) {
        return groups.clone();
    }

    let vertical = map.free_offset(group, Direction::Up, map.height());
    let horizontal = map.free_offset(group, Direction::Right, map.width());
    debug!(
        "expand(group = {}, vertical = {}, horizontal = {})",
        group, vertical, horizontal
    );

    let mut moves = Vec::with_capacity(4);
    if vertical > 0 {
        moves.push((Direction::Up, vertical));
        moves.push((Direction::Down, vertical));
    }
    if horizontal > 0 {
        moves.push((Direction::Left, horizontal));
        moves.push((Direction::Right, horizontal));
    }

    let mut result = Vec::new();
    for (direction, amount) in moves {
        let shifted: AdjacencyGroup = group.iter().map(|c| map.shift(c, direction, amount)).collect();
        if shifted.iter().all(|c| map.is_filled(c)) {
            debug!("expand: {} by {} accepted", direction, amount);
            let grown = group.union(&shifted);
            for g in _expand(map, &grown, cache) {
                if !result.contains(&g) {
                    result.push(g);
                }
            }
        }
    }

    if result.is_empty() {
        debug!("expand: {} is maximal", group);
        result.push(group.clone());
    }

    cache.insert(group.clone(), result.clone());
    result
}

/// Keeps the first of every set-equal group, then drops groups strictly contained in another.
fn remove_redundant(groups: Vec<AdjacencyGroup>) -> Vec<AdjacencyGroup> {
    let mut seen = HashSet::new();
    let unique: Vec<AdjacencyGroup> = groups.into_iter().filter(|g| seen.insert(g.clone())).collect();

    unique
        .iter()
        .filter(|g| !unique.iter().any(|other| g.is_strict_subset(other)))
        .cloned()
        .collect()
}
