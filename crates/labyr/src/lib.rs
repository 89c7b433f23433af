//! Labyr: a shortest-path solver for rectangular grid mazes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Labyr sub-crates. For most users, adding `labyr` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use labyr::prelude::*;
//!
//! let mut grid: Grid = "0 0 0\n0 1 0\n0 0 0\n".parse().unwrap();
//! let solution = solve_grid(&mut grid);
//! assert_eq!(solution.outcome, Outcome::Solved { steps: 4 });
//!
//! grid.clear_non_path();
//! assert_eq!(
//!     grid.to_string(),
//!     "|-------|\n  + + + |\n| . # + |\n| . . + \n|-------|\n"
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `labyr-core` | Coordinates, directions, cell states, errors |
//! | [`grid`] | `labyr-grid` | Maze storage, parsing, path reconstruction, rendering |
//! | [`engine`] | `labyr-engine` | Breadth-first traversal and the solve pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and error enums (`labyr-core`).
pub use labyr_core as types;

/// The maze grid model (`labyr-grid`).
pub use labyr_grid as grid;

/// Breadth-first traversal and solve pipeline (`labyr-engine`).
///
/// [`engine::Traversal`] for step-by-step control, [`engine::solve`] for
/// the complete read → solve → write pipeline.
pub use labyr_engine as engine;

/// Common imports for typical Labyr usage.
///
/// ```rust
/// use labyr::prelude::*;
/// ```
pub mod prelude {
    pub use labyr_core::{CellState, Coord, Direction, ParseError, SolveError};
    pub use labyr_engine::{
        solve, solve_grid, solve_parsed, Outcome, Solution, SolveConfig, StepOutcome, Traversal,
        TraversalMetrics,
    };
    pub use labyr_grid::Grid;
}
