//! Row-major cell storage with bounds-checked access.

use std::ops::{Index, IndexMut};

use labyr_core::{CellState, Coord, Direction};
use smallvec::SmallVec;

/// Legal moves out of a cell, in [`Direction::EXPANSION_ORDER`].
pub type Moves = SmallVec<[(Direction, Coord); 4]>;

/// A rectangular maze.
///
/// Cells live in one contiguous buffer indexed by `row * width + col`.
/// Dimensions are fixed at construction and never change.
///
/// A grid is single-use: a traversal overwrites open cells with
/// backpointers, and [`reconstruct_path`](Grid::reconstruct_path)
/// consumes those backpointers. Solving again requires a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: u32,
    width: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a `height × width` grid with every cell open.
    ///
    /// Returns `None` if either dimension is zero.
    pub fn new(height: u32, width: u32) -> Option<Self> {
        if height == 0 || width == 0 {
            return None;
        }
        let len = (height as usize) * (width as usize);
        Some(Self {
            height,
            width,
            cells: vec![CellState::Open; len],
        })
    }

    /// Build a grid from a row-major cell buffer.
    ///
    /// Callers guarantee `cells.len() == height * width` and non-zero
    /// dimensions; the parser is the only producer.
    pub(crate) fn from_cells(height: u32, width: u32, cells: Vec<CellState>) -> Self {
        debug_assert!(height > 0 && width > 0);
        debug_assert_eq!(cells.len(), (height as usize) * (width as usize));
        Self {
            height,
            width,
            cells,
        }
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The bottom-right cell.
    pub fn goal(&self) -> Coord {
        Coord::new(self.height - 1, self.width - 1)
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {coord} out of bounds for {}x{} grid",
            self.height,
            self.width
        );
        (coord.row as usize) * (self.width as usize) + (coord.col as usize)
    }

    /// State of the cell at `coord`, or `None` if it is off the grid.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        if self.contains(coord) {
            Some(self[coord])
        } else {
            None
        }
    }

    /// Overwrite the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    pub fn set(&mut self, coord: Coord, state: CellState) {
        self[coord] = state;
    }

    /// One row of cells.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: u32) -> &[CellState] {
        assert!(row < self.height, "row {row} out of bounds");
        let w = self.width as usize;
        let start = (row as usize) * w;
        &self.cells[start..start + w]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Neighbours of `from` that are still [`Open`](CellState::Open),
    /// paired with the direction of the move, in expansion order.
    pub fn open_moves(&self, from: Coord) -> Moves {
        Direction::EXPANSION_ORDER
            .iter()
            .filter_map(|&dir| {
                let to = from.step(dir, self.height, self.width)?;
                self[to].is_open().then_some((dir, to))
            })
            .collect()
    }

    /// Walk the backpointers from the goal back to the start, marking
    /// every cell on the way as [`PathMarker`](CellState::PathMarker).
    ///
    /// Returns the path length in moves (the number of marked cells minus
    /// one), or `None` without touching the grid if the goal was never
    /// reached. The walk ends when the start cell's backpointer leads off
    /// the grid to the virtual pre-start position.
    ///
    /// Consumes the backpointers: a second call returns `None`.
    pub fn reconstruct_path(&mut self) -> Option<u32> {
        let mut at = self.goal();
        self[at].came_from()?;

        let mut marked: u32 = 0;
        // Each iteration marks one cell, and a marked cell has no
        // backpointer, so the walk is bounded by the cell count.
        while let Some(dir) = self[at].came_from() {
            self[at] = CellState::PathMarker;
            marked += 1;
            match at.step(dir, self.height, self.width) {
                Some(prev) => at = prev,
                None => break,
            }
        }
        tracing::debug!(cells = marked, "reconstructed path");
        Some(marked - 1)
    }

    /// Turn every passable cell that is not on the path into
    /// [`Unmarked`](CellState::Unmarked). Idempotent.
    pub fn clear_non_path(&mut self) {
        for cell in &mut self.cells {
            if !matches!(cell, CellState::Blocked | CellState::PathMarker) {
                *cell = CellState::Unmarked;
            }
        }
    }
}

impl Index<Coord> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coord) -> &CellState {
        &self.cells[self.index_of(coord)]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut CellState {
        let i = self.index_of(coord);
        &mut self.cells[i]
    }
}
