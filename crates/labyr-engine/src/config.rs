//! What a solve should write to its output sink.

/// Output selection for [`solve`](crate::solve).
///
/// All switches default to off, in which case the maze is solved and
/// nothing is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveConfig {
    /// Render the maze as read, before solving.
    pub display: bool,
    /// Write `Solution in N steps.` or `No solution.`.
    pub report_steps: bool,
    /// Render the maze with the shortest path marked, if one exists.
    pub show_path: bool,
}

impl SolveConfig {
    /// Whether any output was requested.
    pub fn writes_anything(&self) -> bool {
        self.display || self.report_steps || self.show_path
    }
}
