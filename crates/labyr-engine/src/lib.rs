//! Breadth-first traversal engine for Labyr mazes.
//!
//! [`Traversal`] drives a BFS over a [`Grid`](labyr_grid::Grid) from the
//! top-left cell to the bottom-right cell, recording in every discovered
//! cell the neighbour it was reached from. [`solve`] wraps the whole
//! pipeline: parse, optionally display, traverse, report and render.
//!
//! ```
//! use labyr_engine::{solve, Outcome, SolveConfig};
//!
//! let config = SolveConfig { report_steps: true, ..Default::default() };
//! let mut out = Vec::new();
//! let outcome = solve(&config, "0 0\n0 0\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(outcome, Outcome::Solved { steps: 2 });
//! assert_eq!(out, b"Solution in 2 steps.\n");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
mod frontier;
pub mod metrics;
pub mod solve;
pub mod traversal;

pub use config::SolveConfig;
pub use metrics::TraversalMetrics;
pub use solve::{solve, solve_grid, solve_parsed, Outcome, Solution};
pub use traversal::{StepOutcome, Traversal, TraversalResult};
