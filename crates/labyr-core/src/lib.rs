//! Core types for the Labyr maze solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid model and the traversal engine:
//! coordinates, compass directions, the closed set of cell states, and
//! the error types surfaced to callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;

pub use cell::CellState;
pub use coord::{Coord, Direction};
pub use error::{ParseError, SolveError};
