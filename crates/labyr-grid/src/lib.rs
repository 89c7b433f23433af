//! Maze grid model for Labyr.
//!
//! [`Grid`] owns the cell states of one maze. It is built from text by
//! [`Grid::parse`], mutated in place by the traversal engine (each
//! discovered cell records the neighbour it was reached from), and
//! afterwards turned into a printable picture by
//! [`reconstruct_path`](Grid::reconstruct_path),
//! [`clear_non_path`](Grid::clear_non_path) and the [`Display`](std::fmt::Display)
//! impl.
//!
//! # Input format
//!
//! One row per line, cells separated by whitespace or commas. `1` is a
//! wall, any other single character is open floor. The first row fixes
//! the width.
//!
//! ```
//! use labyr_grid::Grid;
//!
//! let grid: Grid = "0 1\n0 0\n".parse().unwrap();
//! assert_eq!((grid.height(), grid.width()), (2, 2));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod parse;
pub mod render;

pub use grid::{Grid, Moves};
