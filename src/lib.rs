//! # kmap-rs: Karnaugh maps in Rust
//!
//! **`kmap-rs`** models a **Karnaugh map** — the grid layout of a boolean truth table in which
//! neighbouring cells differ in exactly one input bit — and discovers the **adjacency groups**
//! of its filled cells: maximal power-of-two rectangular blocks, wrapping around the edges.
//!
//! ## What is a Karnaugh map?
//!
//! For `n` input variables, the map is a `2^⌊n/2⌋ × 2^⌈n/2⌉` grid. The most significant
//! `⌊n/2⌋` bits of an input combination select the row, the remaining bits select the column,
//! and both axes are ordered by the [Gray code][crate::gray] so that stepping to any neighbour
//! (including across an edge) flips exactly one bit. A block of `2^k` neighbouring filled cells
//! then corresponds to a product term with `k` fewer literals.
//!
//! ## Key Features
//!
//! - **Explicit cells**: a cell is [`Cell::Empty`][crate::types::Cell::Empty] or
//!   [`Cell::Filled`][crate::types::Cell::Filled], never a magic sentinel.
//! - **Gray-code placement**: [`encode_to_coordinate`][crate::encoding::encode_to_coordinate] and
//!   [`decode_from_coordinate`][crate::encoding::decode_from_coordinate] map truth-table rows
//!   to grid positions and back.
//! - **Toroidal geometry**: all shifts wrap around, so edges are adjacent to opposite edges.
//! - **Group discovery**: [`find_adjacency_groups`][crate::finder::find_adjacency_groups]
//!   returns every maximal group, without duplicates or contained subgroups.
//!
//! Note that the crate does not compute a minimal cover: it finds the groups and renders them,
//! choosing among them is left to the caller.
//!
//! ## Basic Usage
//!
//! ```rust
//! use kmap_rs::clause::{render_all_clauses, render_group};
//! use kmap_rs::finder::find_adjacency_groups;
//! use kmap_rs::kmap::KarnaughMap;
//!
//! // 1. Create a map over three variables a, b, c
//! let mut map = KarnaughMap::new(3).unwrap();
//!
//! // 2. Fill in the truth-table rows where the function is true
//! for value in [2, 3, 6, 7] {
//!     assert!(map.set_cell_by_value(value));
//! }
//!
//! // 3. Inspect the cells as clauses
//! assert_eq!(render_all_clauses(&map), vec!["-a b c", "-a b -c", "a b c", "a b -c"]);
//!
//! // 4. Find the groups: here, a single block of four cells, `b`
//! let groups = find_adjacency_groups(&map);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(render_group(&map, &groups[0]), "b");
//! ```
//!
//! ## Core Components
//!
//! - **[`kmap`]**: the [`KarnaughMap`][crate::kmap::KarnaughMap] grid, cell mutation and shifts.
//! - **[`finder`]**: the recursive adjacency-group search.
//! - **[`clause`]**: rendering of cells and groups as literal clauses.
//! - **[`gray`]**: Gray code generation and header labels.

pub mod clause;
pub mod display;
pub mod encoding;
pub mod error;
pub mod finder;
pub mod gray;
pub mod group;
pub mod kmap;
pub mod types;
