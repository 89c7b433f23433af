//! Text → [`Grid`] conversion.

use std::io::BufRead;
use std::str::FromStr;

use labyr_core::{CellState, ParseError};

use crate::grid::Grid;

/// Token that marks a wall. Every other single-character token is open.
const WALL: char = '1';

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Parse one line into cell states, appending to `out`.
///
/// Returns the number of cells on the line.
fn parse_row(line_no: usize, line: &str, out: &mut Vec<CellState>) -> Result<usize, ParseError> {
    let mut count = 0;
    for (i, token) in line.split(is_separator).filter(|t| !t.is_empty()).enumerate() {
        let mut chars = token.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(ParseError::InvalidToken {
                line: line_no,
                column: i + 1,
                token: token.to_owned(),
            });
        };
        out.push(if ch == WALL {
            CellState::Blocked
        } else {
            CellState::Open
        });
        count += 1;
    }
    Ok(count)
}

fn to_dim(name: &'static str, value: usize) -> Result<u32, ParseError> {
    u32::try_from(value).map_err(|_| ParseError::TooLarge { name, value })
}

impl Grid {
    /// Read a maze from a line-oriented stream until end of input.
    ///
    /// Blank lines before the first row and after the last row are
    /// ignored. Every row must have exactly as many cells as the first;
    /// a blank line between rows counts as a row with zero cells.
    pub fn parse<R: BufRead>(reader: R) -> Result<Grid, ParseError> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height: usize = 0;
        // Blank line seen after the first row; only an error if a row follows.
        let mut pending_blank: Option<usize> = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.split(is_separator).all(str::is_empty) {
                if width.is_some() && pending_blank.is_none() {
                    pending_blank = Some(line_no);
                }
                continue;
            }
            if let (Some(expected), Some(blank)) = (width, pending_blank) {
                return Err(ParseError::RaggedRow {
                    line: blank,
                    expected,
                    found: 0,
                });
            }

            let found = parse_row(line_no, &line, &mut cells)?;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(ParseError::RaggedRow {
                        line: line_no,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.ok_or(ParseError::Empty)?;
        let grid = Grid::from_cells(to_dim("rows", height)?, to_dim("cols", width)?, cells);
        tracing::debug!(
            height = grid.height(),
            width = grid.width(),
            walls = grid.count(CellState::Blocked),
            "parsed maze"
        );
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyr_core::Coord;

    #[test]
    fn parses_walls_and_floor() {
        let g: Grid = "0 1 0\n1 0 0\n".parse().unwrap();
        assert_eq!((g.height(), g.width()), (2, 3));
        assert_eq!(g[Coord::new(0, 1)], CellState::Blocked);
        assert_eq!(g[Coord::new(1, 0)], CellState::Blocked);
        assert_eq!(g.count(CellState::Open), 4);
    }

    #[test]
    fn any_other_character_is_open() {
        let g: Grid = "x 1 .\n".parse().unwrap();
        assert_eq!(g.row(0), &[CellState::Open, CellState::Blocked, CellState::Open]);
    }

    #[test]
    fn accepts_commas_tabs_and_crlf() {
        let g: Grid = "0,1\t0\r\n1, 0 ,0\r\n".parse().unwrap();
        assert_eq!((g.height(), g.width()), (2, 3));
    }

    #[test]
    fn missing_final_newline() {
        let g: Grid = "0 0\n0 0".parse().unwrap();
        assert_eq!(g.height(), 2);
    }

    #[test]
    fn surrounding_blank_lines_ignored() {
        let g: Grid = "\n\n0 0\n0 1\n\n  \n".parse().unwrap();
        assert_eq!((g.height(), g.width()), (2, 2));
    }

    #[test]
    fn empty_input() {
        assert_eq!("".parse::<Grid>(), Err(ParseError::Empty));
        assert_eq!("\n \n".parse::<Grid>(), Err(ParseError::Empty));
    }

    #[test]
    fn short_row_is_ragged() {
        assert_eq!(
            "0 0 0\n0 0\n".parse::<Grid>(),
            Err(ParseError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn long_row_is_ragged() {
        assert_eq!(
            "0 0\n0 0\n0 0 0\n".parse::<Grid>(),
            Err(ParseError::RaggedRow {
                line: 3,
                expected: 2,
                found: 3,
            })
        );
    }

    #[test]
    fn interior_blank_line_is_ragged() {
        assert_eq!(
            "0 0\n\n0 0\n".parse::<Grid>(),
            Err(ParseError::RaggedRow {
                line: 2,
                expected: 2,
                found: 0,
            })
        );
    }

    #[test]
    fn multi_character_token_rejected() {
        assert_eq!(
            "0 10 0\n".parse::<Grid>(),
            Err(ParseError::InvalidToken {
                line: 1,
                column: 2,
                token: "10".into(),
            })
        );
    }

    #[test]
    fn unseparated_row_rejected() {
        assert!(matches!(
            "0101\n".parse::<Grid>(),
            Err(ParseError::InvalidToken { line: 1, column: 1, .. })
        ));
    }
}
