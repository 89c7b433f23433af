//! Test utilities for Labyr development.
//!
//! - [`grid_from_rows`]: build a grid from compact row literals.
//! - [`random_grid`]: seeded random mazes for property tests and benches.
//! - [`reference_distance`]: an independent shortest-path oracle.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use labyr_core::{CellState, Coord, Direction};
use labyr_grid::Grid;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use fixtures::*;

/// Build a grid from rows written without separators, e.g. `["010", "000"]`.
///
/// `#` and `1` are walls; anything else is open.
///
/// # Panics
///
/// Panics on empty or ragged input.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let text: String = rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .chars()
                .map(|c| if c == '#' { "1".into() } else { c.to_string() })
                .collect();
            cells.join(" ") + "\n"
        })
        .collect();
    text.parse().expect("fixture rows must form a valid maze")
}

/// A `height × width` grid where each cell is a wall with probability
/// `wall_ratio`. Deterministic for a given seed.
///
/// The start and goal cells are left open so that most generated mazes
/// are interesting; block them explicitly to test that case.
pub fn random_grid(seed: u64, height: u32, width: u32, wall_ratio: f64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(height, width).expect("non-zero dimensions");
    for row in 0..height {
        for col in 0..width {
            if rng.gen_bool(wall_ratio) {
                grid.set(Coord::new(row, col), CellState::Blocked);
            }
        }
    }
    grid.set(Coord::START, CellState::Open);
    let goal = grid.goal();
    grid.set(goal, CellState::Open);
    grid
}

/// Shortest start→goal distance in moves, computed with a plain
/// distance-table BFS that shares no code with the engine.
///
/// Treats every non-wall cell as passable, so call it on a fresh grid.
pub fn reference_distance(grid: &Grid) -> Option<u32> {
    if grid[Coord::START].is_blocked() {
        return None;
    }
    let (h, w) = (grid.height(), grid.width());
    let mut dist: Vec<Option<u32>> = vec![None; grid.cell_count()];
    let idx = |c: Coord| (c.row as usize) * (w as usize) + c.col as usize;

    let mut queue = VecDeque::new();
    dist[idx(Coord::START)] = Some(0);
    queue.push_back(Coord::START);
    while let Some(at) = queue.pop_front() {
        let d = dist[idx(at)].expect("queued cells have a distance");
        for dir in [Direction::Up, Direction::Left, Direction::Down, Direction::Right] {
            if let Some(next) = at.step(dir, h, w) {
                if !grid[next].is_blocked() && dist[idx(next)].is_none() {
                    dist[idx(next)] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    dist[idx(grid.goal())]
}

/// Whether the cells marked [`PathMarker`](CellState::PathMarker) form a
/// single 4-connected chain from the start to the goal.
pub fn path_is_connected(grid: &Grid) -> bool {
    let (h, w) = (grid.height(), grid.width());
    let on_path = |c: Coord| grid[c] == CellState::PathMarker;
    if !on_path(Coord::START) || !on_path(grid.goal()) {
        return false;
    }
    let mut prev: Option<Coord> = None;
    let mut at = Coord::START;
    let mut walked = 1;
    while at != grid.goal() {
        let next = [Direction::Right, Direction::Down, Direction::Left, Direction::Up]
            .into_iter()
            .filter_map(|d| at.step(d, h, w))
            .find(|&n| on_path(n) && Some(n) != prev);
        match next {
            Some(n) => {
                prev = Some(at);
                at = n;
                walked += 1;
            }
            None => return false,
        }
    }
    walked == grid.count(CellState::PathMarker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_fixture_parses_hash_as_wall() {
        let g = grid_from_rows(&["0#", "00"]);
        assert_eq!(g[Coord::new(0, 1)], CellState::Blocked);
    }

    #[test]
    fn random_grid_is_deterministic() {
        assert_eq!(random_grid(7, 8, 8, 0.3), random_grid(7, 8, 8, 0.3));
    }

    #[test]
    fn random_grid_keeps_endpoints_open() {
        for seed in 0..20 {
            let g = random_grid(seed, 5, 6, 0.9);
            assert!(g[Coord::START].is_open());
            assert!(g[g.goal()].is_open());
        }
    }

    #[test]
    fn reference_distance_basic() {
        assert_eq!(reference_distance(&grid_from_rows(&["00", "00"])), Some(2));
        assert_eq!(reference_distance(&grid_from_rows(&["0#", "#0"])), None);
        assert_eq!(reference_distance(&grid_from_rows(&["0"])), Some(0));
    }
}
