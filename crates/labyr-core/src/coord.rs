//! Grid coordinates and the four compass directions.

use std::fmt;

/// A validated cell position `(row, col)` inside a grid.
///
/// Coordinates are unsigned: there is no representation for a cell left
/// of column 0 or above row 0. Stepping off the grid is expressed by
/// [`Coord::step`] returning `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row index.
    pub row: u32,
    /// Zero-based column index.
    pub col: u32,
}

impl Coord {
    /// The top-left cell, where every solve begins.
    pub const START: Coord = Coord { row: 0, col: 0 };

    /// Construct a coordinate.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The neighbouring coordinate one cell away in `dir`, if it lies
    /// inside a `height × width` grid.
    ///
    /// ```
    /// use labyr_core::{Coord, Direction};
    ///
    /// let c = Coord::new(0, 0);
    /// assert_eq!(c.step(Direction::Right, 2, 2), Some(Coord::new(0, 1)));
    /// assert_eq!(c.step(Direction::Up, 2, 2), None);
    /// ```
    pub fn step(self, dir: Direction, height: u32, width: u32) -> Option<Coord> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < height && col < width {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Manhattan (L1) distance between two coordinates.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal moves on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards column 0.
    Left,
    /// Towards row 0.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
}

impl Direction {
    /// Order in which the traversal engine tries moves from a cell.
    ///
    /// Fixes which of several equally short paths is reported.
    pub const EXPANSION_ORDER: [Direction; 4] =
        [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

    /// `(row, col)` delta for one step in this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// The opposite direction.
    pub const fn inverse(self) -> Direction {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}
