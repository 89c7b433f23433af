//! Breadth-first search over a [`Grid`].
//!
//! # Marking
//!
//! A cell is marked with its backpointer the moment it is enqueued, not
//! when it is dequeued. Two frontier nodes that share an open neighbour
//! therefore cannot both enqueue it, so each cell enters the queue at
//! most once and the run is bounded by the cell count.
//!
//! # Seeding
//!
//! The frontier starts with a single pre-start node, the virtual
//! position left of the start cell. Expanding it discovers the start cell
//! through the same legality check as every other move, so a blocked
//! start simply produces an empty frontier.

use labyr_core::{CellState, Coord, Direction};
use labyr_grid::{Grid, Moves};

use crate::frontier::{Frontier, Node};
use crate::metrics::TraversalMetrics;

/// Result of a single [`Traversal::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The goal cell was dequeued. Terminal.
    Goal,
    /// A node was expanded and `discovered` new cells were enqueued.
    Expanded {
        /// Cells marked and enqueued by this step.
        discovered: usize,
    },
    /// The frontier is empty and the goal was never reached. Terminal.
    Exhausted,
}

impl StepOutcome {
    /// Whether stepping further would change nothing.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Expanded { .. })
    }
}

/// Result of [`Traversal::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalResult {
    /// Whether the goal was dequeued.
    pub reached_goal: bool,
    /// Work done by the run.
    pub metrics: TraversalMetrics,
}

/// A breadth-first search in progress.
///
/// Borrows the grid mutably for its whole lifetime: open cells are
/// overwritten with [`CellState::VisitedFrom`] as they are discovered.
pub struct Traversal<'g> {
    grid: &'g mut Grid,
    goal: Coord,
    frontier: Frontier,
    metrics: TraversalMetrics,
    finished: Option<StepOutcome>,
}

impl<'g> Traversal<'g> {
    /// Start a traversal of `grid`, seeded with the virtual pre-start node.
    pub fn new(grid: &'g mut Grid) -> Self {
        let goal = grid.goal();
        let mut frontier = Frontier::with_capacity(grid.width().max(grid.height()) as usize);
        frontier.push(Node::PreStart);
        Self {
            grid,
            goal,
            frontier,
            metrics: TraversalMetrics::default(),
            finished: None,
        }
    }

    /// Work done so far.
    pub fn metrics(&self) -> &TraversalMetrics {
        &self.metrics
    }

    /// Number of nodes waiting in the frontier.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Dequeue one node and expand it.
    ///
    /// Once a terminal outcome has been returned, further calls return
    /// the same outcome without touching the grid.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(done) = self.finished {
            return done;
        }
        let Some(node) = self.frontier.pop() else {
            tracing::debug!(expansions = self.metrics.expansions, "frontier exhausted");
            return self.finish(StepOutcome::Exhausted);
        };
        self.metrics.expansions += 1;

        let moves = match node {
            Node::PreStart => self.start_moves(),
            Node::Cell(at) if at == self.goal => {
                tracing::debug!(expansions = self.metrics.expansions, "goal reached");
                return self.finish(StepOutcome::Goal);
            }
            Node::Cell(at) => self.grid.open_moves(at),
        };

        for &(dir, to) in &moves {
            self.grid[to] = CellState::VisitedFrom(dir.inverse());
            self.frontier.push(Node::Cell(to));
        }
        tracing::trace!(?node, discovered = moves.len(), "expanded");

        self.metrics.discovered += moves.len() as u64;
        self.metrics.peak_frontier = self.frontier.peak();
        StepOutcome::Expanded {
            discovered: moves.len(),
        }
    }

    /// Step until the goal is reached or the frontier runs dry.
    pub fn run(mut self) -> TraversalResult {
        let outcome = loop {
            let outcome = self.step();
            if outcome.is_terminal() {
                break outcome;
            }
        };
        TraversalResult {
            reached_goal: outcome == StepOutcome::Goal,
            metrics: self.metrics,
        }
    }

    /// The only move out of the pre-start position: right, into the start.
    fn start_moves(&self) -> Moves {
        let mut moves = Moves::new();
        if self.grid[Coord::START].is_open() {
            moves.push((Direction::Right, Coord::START));
        }
        moves
    }

    fn finish(&mut self, outcome: StepOutcome) -> StepOutcome {
        self.finished = Some(outcome);
        outcome
    }
}
