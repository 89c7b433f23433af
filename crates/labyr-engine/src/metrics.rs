//! Counters collected while a traversal runs.

/// Work done by one [`Traversal`](crate::Traversal).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalMetrics {
    /// Frontier nodes dequeued, including the virtual pre-start node.
    pub expansions: u64,
    /// Cells marked as discovered.
    pub discovered: u64,
    /// Largest frontier length observed.
    pub peak_frontier: usize,
}
