//! FIFO queue of cells awaiting expansion.

use std::collections::VecDeque;

use labyr_core::Coord;

/// An entry in the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    /// The virtual position one column left of the start. Expanding it
    /// can only discover the start cell, by moving right.
    PreStart,
    /// A real grid cell.
    Cell(Coord),
}

/// Discovered-but-unexpanded nodes, in discovery order.
///
/// Strict insertion order is what makes the traversal breadth-first:
/// every node at distance `d` is dequeued before any node at `d + 1`.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Node>,
    peak: usize,
}

impl Frontier {
    /// An empty frontier with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            peak: 0,
        }
    }

    /// Append a node at the back.
    pub fn push(&mut self, node: Node) {
        self.queue.push_back(node);
        self.peak = self.peak.max(self.queue.len());
    }

    /// Remove the oldest node.
    pub fn pop(&mut self) -> Option<Node> {
        self.queue.pop_front()
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Largest length the queue has reached.
    pub fn peak(&self) -> usize {
        self.peak
    }
}
