//! Benchmark profiles for the Labyr maze solver.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells)
//! - [`stress_profile`]: 316x316 grid (~100K cells)
//!
//! Both are seeded random mazes at a wall ratio low enough that the goal
//! is usually reachable, so the traversal explores most of the grid.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use labyr_grid::Grid;
use labyr_test_utils::random_grid;

/// Fraction of cells that are walls in the benchmark mazes.
pub const WALL_RATIO: f64 = 0.25;

/// 100x100 maze.
pub fn reference_profile(seed: u64) -> Grid {
    random_grid(seed, 100, 100, WALL_RATIO)
}

/// 316x316 maze, roughly 10x the cells of [`reference_profile`].
pub fn stress_profile(seed: u64) -> Grid {
    random_grid(seed, 316, 316, WALL_RATIO)
}

/// The maze in the text format the parser reads.
pub fn to_input_text(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.cell_count() * 2);
    for row in 0..grid.height() {
        let cells: Vec<&str> = grid
            .row(row)
            .iter()
            .map(|c| if c.is_blocked() { "1" } else { "0" })
            .collect();
        text.push_str(&cells.join(" "));
        text.push('\n');
    }
    text
}
