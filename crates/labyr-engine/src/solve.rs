//! End-to-end pipeline: parse, traverse, report, render.

use std::fmt;
use std::io::{BufRead, Write};

use labyr_core::SolveError;
use labyr_grid::Grid;

use crate::config::SolveConfig;
use crate::metrics::TraversalMetrics;
use crate::traversal::Traversal;

/// How a solve ended. Neither variant is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A shortest path exists and is `steps` moves long.
    Solved {
        /// Moves from start to goal; `0` when they are the same cell.
        steps: u32,
    },
    /// The goal cannot be reached from the start.
    NoSolution,
}

impl Outcome {
    /// The report line written for `-s`, including the newline.
    pub fn render_line(&self) -> String {
        format!("{self}\n")
    }

    /// Path length in moves, if solved.
    pub fn steps(&self) -> Option<u32> {
        match self {
            Self::Solved { steps } => Some(*steps),
            Self::NoSolution => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved { steps } => write!(f, "Solution in {steps} steps."),
            Self::NoSolution => write!(f, "No solution."),
        }
    }
}

/// Outcome of solving one grid, plus the traversal's counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Whether and how the maze was solved.
    pub outcome: Outcome,
    /// Work done by the traversal.
    pub metrics: TraversalMetrics,
}

/// Run a traversal on `grid` and, if the goal was reached, mark the
/// shortest path with [`PathMarker`](labyr_core::CellState::PathMarker).
///
/// The grid is left with the path marked and every other discovered cell
/// still holding its backpointer; call
/// [`Grid::clear_non_path`] before rendering the path.
pub fn solve_grid(grid: &mut Grid) -> Solution {
    let result = Traversal::new(grid).run();
    let outcome = if result.reached_goal {
        grid.reconstruct_path()
            .map_or(Outcome::NoSolution, |steps| Outcome::Solved { steps })
    } else {
        Outcome::NoSolution
    };
    tracing::debug!(
        %outcome,
        expansions = result.metrics.expansions,
        peak_frontier = result.metrics.peak_frontier,
        "solve finished"
    );
    Solution {
        outcome,
        metrics: result.metrics,
    }
}

/// Parse a maze from `input`, solve it, and write what `config` asks for
/// to `output`.
///
/// Nothing is written unless the input parses; see [`solve_parsed`] for
/// the output order.
///
/// # Errors
///
/// [`SolveError::Parse`] if the input is malformed (nothing is written),
/// [`SolveError::Output`] if writing fails.
pub fn solve<R, W>(config: &SolveConfig, input: R, output: &mut W) -> Result<Outcome, SolveError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let grid = Grid::parse(input)?;
    solve_parsed(config, grid, output)
}

/// Solve an already parsed maze and write what `config` asks for to
/// `output`.
///
/// Output order: the pre-solve render (`display`), the report line
/// (`report_steps`), then the path render (`show_path`, only when a path
/// exists).
///
/// # Errors
///
/// [`SolveError::Output`] if writing fails.
pub fn solve_parsed<W>(
    config: &SolveConfig,
    mut grid: Grid,
    output: &mut W,
) -> Result<Outcome, SolveError>
where
    W: Write + ?Sized,
{
    if config.display {
        grid.render(output)?;
    }

    let Solution { outcome, .. } = solve_grid(&mut grid);

    if config.report_steps {
        output.write_all(outcome.render_line().as_bytes())?;
    }
    if config.show_path && outcome != Outcome::NoSolution {
        grid.clear_non_path();
        grid.render(output)?;
    }
    output.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyr_core::{CellState, ParseError};

    fn run(config: SolveConfig, maze: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = solve(&config, maze.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    const ALL: SolveConfig = SolveConfig {
        display: true,
        report_steps: true,
        show_path: true,
    };

    #[test]
    fn report_lines() {
        assert_eq!(
            Outcome::Solved { steps: 7 }.render_line(),
            "Solution in 7 steps.\n"
        );
        assert_eq!(Outcome::NoSolution.render_line(), "No solution.\n");
    }

    #[test]
    fn silent_config_writes_nothing() {
        let (outcome, text) = run(SolveConfig::default(), "0 0\n0 0\n");
        assert_eq!(outcome, Outcome::Solved { steps: 2 });
        assert!(text.is_empty());
    }

    #[test]
    fn all_outputs_in_order() {
        let (_, text) = run(ALL, "0 0\n0 0\n");
        assert_eq!(
            text,
            "|-----|\n  . . |\n| . . \n|-----|\n\
             Solution in 2 steps.\n\
             |-----|\n  + + |\n| . + \n|-----|\n"
        );
    }

    #[test]
    fn no_solution_skips_path_render() {
        let (outcome, text) = run(ALL, "0 1\n1 0\n");
        assert_eq!(outcome, Outcome::NoSolution);
        assert_eq!(text, "|-----|\n  . # |\n| # . \n|-----|\nNo solution.\n");
    }

    #[test]
    fn malformed_input_writes_nothing() {
        let mut out = Vec::new();
        let err = solve(&ALL, "0 0\n0\n".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            SolveError::Parse(ParseError::RaggedRow { line: 2, .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn solve_parsed_matches_solve() {
        let grid: Grid = "0 1 0\n0 0 0\n".parse().unwrap();
        let mut out = Vec::new();
        let outcome = solve_parsed(&ALL, grid, &mut out).unwrap();
        let (expected_outcome, expected_text) = run(ALL, "0 1 0\n0 0 0\n");
        assert_eq!(outcome, expected_outcome);
        assert_eq!(String::from_utf8(out).unwrap(), expected_text);
    }

    #[test]
    fn solve_grid_leaves_backpointers_off_path() {
        let mut g: Grid = "0 0\n0 0\n".parse().unwrap();
        let solution = solve_grid(&mut g);
        assert_eq!(solution.outcome.steps(), Some(2));
        assert_eq!(g.count(CellState::PathMarker), 3);
        assert!(g[labyr_core::Coord::new(1, 0)].came_from().is_some());
    }
}
