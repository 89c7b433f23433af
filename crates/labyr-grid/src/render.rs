//! ASCII rendering of a [`Grid`].
//!
//! ```text
//! |-----|
//!   + # |
//! | + +
//! |-----|
//! ```
//!
//! The gap at the start of the first row and at the end of the last row
//! are the maze's entrance and exit.

use std::fmt;
use std::io::{self, Write};

use labyr_core::Coord;

use crate::grid::Grid;

fn write_border(f: &mut fmt::Formatter<'_>, width: u32) -> fmt::Result {
    f.write_str("|")?;
    for _ in 0..(2 * width as usize + 1) {
        f.write_str("-")?;
    }
    f.write_str("|\n")
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_border(f, self.width())?;
        let last = self.height() - 1;
        for row in 0..self.height() {
            f.write_str(if row == 0 { "  " } else { "| " })?;
            for col in 0..self.width() {
                write!(f, "{} ", self[Coord::new(row, col)].glyph())?;
            }
            if row != last {
                f.write_str("|")?;
            }
            f.write_str("\n")?;
        }
        write_border(f, self.width())
    }
}

impl Grid {
    /// Write the bordered picture of the grid to `out`.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}
