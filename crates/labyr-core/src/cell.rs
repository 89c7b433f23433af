//! The closed set of states a maze cell can be in.

use crate::coord::Direction;

/// State of a single maze cell.
///
/// During a solve, open cells move from [`Open`](CellState::Open) to
/// [`VisitedFrom`](CellState::VisitedFrom) exactly once. The remaining
/// variants only appear after traversal finishes, when the grid is being
/// prepared for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// A wall. Never entered.
    Blocked,
    /// Passable and not yet discovered.
    Open,
    /// Discovered by the traversal. The direction points at the neighbour
    /// the cell was reached from (its backpointer).
    VisitedFrom(Direction),
    /// On the reconstructed shortest path.
    PathMarker,
    /// Passable but not on the path, after markers have been cleared.
    Unmarked,
}

impl CellState {
    /// Character used when the grid is rendered.
    pub const fn glyph(self) -> char {
        match self {
            Self::Blocked => '#',
            Self::Open | Self::Unmarked => '.',
            Self::PathMarker => '+',
            Self::VisitedFrom(Direction::Left) => '<',
            Self::VisitedFrom(Direction::Up) => '^',
            Self::VisitedFrom(Direction::Right) => '>',
            Self::VisitedFrom(Direction::Down) => 'v',
        }
    }

    /// Whether the traversal may still enter this cell.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the cell is a wall.
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// The backpointer, if the cell has been discovered.
    pub const fn came_from(self) -> Option<Direction> {
        match self {
            Self::VisitedFrom(d) => Some(d),
            _ => None,
        }
    }
}
