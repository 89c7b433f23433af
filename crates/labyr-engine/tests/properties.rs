//! Property tests: the engine against a reference BFS on random mazes.

use labyr_core::{CellState, Coord};
use labyr_engine::{solve_grid, Outcome, Traversal};
use labyr_test_utils::{path_is_connected, random_grid, reference_distance};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn matches_reference_distance(
        seed in any::<u64>(),
        h in 1u32..14,
        w in 1u32..14,
        walls in 0.0f64..0.5,
    ) {
        let mut grid = random_grid(seed, h, w, walls);
        let expected = reference_distance(&grid);
        let solution = solve_grid(&mut grid);
        prop_assert_eq!(solution.outcome.steps(), expected);
    }

    #[test]
    fn path_markers_are_steps_plus_one(
        seed in any::<u64>(),
        h in 1u32..12,
        w in 1u32..12,
        walls in 0.0f64..0.4,
    ) {
        let mut grid = random_grid(seed, h, w, walls);
        match solve_grid(&mut grid).outcome {
            Outcome::Solved { steps } => {
                prop_assert_eq!(grid.count(CellState::PathMarker), steps as usize + 1);
                prop_assert!(path_is_connected(&grid));
                prop_assert!(steps >= Coord::START.manhattan(grid.goal()));
            }
            Outcome::NoSolution => {
                prop_assert_eq!(grid.count(CellState::PathMarker), 0);
            }
        }
    }

    #[test]
    fn terminates_within_cell_bound(
        seed in any::<u64>(),
        h in 1u32..16,
        w in 1u32..16,
        walls in 0.0f64..0.6,
    ) {
        let mut grid = random_grid(seed, h, w, walls);
        let cells = grid.cell_count() as u64;
        let result = Traversal::new(&mut grid).run();
        // The virtual pre-start node accounts for the extra expansion.
        prop_assert!(result.metrics.expansions <= cells + 1);
        prop_assert!(result.metrics.discovered <= cells);
        prop_assert!(result.metrics.peak_frontier <= cells as usize);
    }

    #[test]
    fn blocked_endpoint_means_no_solution(
        seed in any::<u64>(),
        h in 1u32..10,
        w in 1u32..10,
        block_goal in any::<bool>(),
    ) {
        let mut grid = random_grid(seed, h, w, 0.2);
        let target = if block_goal { grid.goal() } else { Coord::START };
        grid.set(target, CellState::Blocked);
        prop_assert_eq!(solve_grid(&mut grid).outcome, Outcome::NoSolution);
    }

    #[test]
    fn open_grid_is_manhattan(h in 1u32..20, w in 1u32..20) {
        let mut grid = random_grid(0, h, w, 0.0);
        let outcome = solve_grid(&mut grid).outcome;
        prop_assert_eq!(outcome, Outcome::Solved { steps: h - 1 + w - 1 });
    }

    #[test]
    fn clearing_twice_renders_the_same(
        seed in any::<u64>(),
        h in 1u32..10,
        w in 1u32..10,
    ) {
        let mut grid = random_grid(seed, h, w, 0.3);
        solve_grid(&mut grid);
        grid.clear_non_path();
        let once = grid.to_string();
        grid.clear_non_path();
        prop_assert_eq!(grid.to_string(), once);
    }
}
