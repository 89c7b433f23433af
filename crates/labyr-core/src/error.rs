//! Error types for maze parsing and solving.
//!
//! Reaching a dead end is not an error: a maze without a route from the
//! start to the goal is a normal outcome reported by the engine. The
//! enums here cover input that cannot be turned into a grid and output
//! that cannot be written.

use std::error::Error;
use std::fmt;
use std::io;

/// Malformed maze input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no rows.
    Empty,
    /// A row's token count differs from the width fixed by the first row.
    RaggedRow {
        /// One-based line number of the offending row.
        line: usize,
        /// Width taken from the first row.
        expected: usize,
        /// Tokens found on this row.
        found: usize,
    },
    /// A token was not a single character.
    InvalidToken {
        /// One-based line number.
        line: usize,
        /// One-based token position within the row.
        column: usize,
        /// The offending token.
        token: String,
    },
    /// The maze is too large to index with `u32` coordinates.
    TooLarge {
        /// Which axis overflowed (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: usize,
    },
    /// The underlying stream could not be read.
    Io {
        /// Kind of the I/O failure.
        kind: io::ErrorKind,
        /// The I/O error's message.
        message: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze input is empty"),
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {line}: expected {expected} cells (width of first row), found {found}"
            ),
            Self::InvalidToken {
                line,
                column,
                token,
            } => write!(
                f,
                "line {line}, cell {column}: token '{token}' is not a single character"
            ),
            Self::TooLarge { name, value } => {
                write!(f, "maze has {value} {name}, exceeding {}", u32::MAX)
            }
            Self::Io { kind, message } => write!(f, "failed to read maze ({kind:?}): {message}"),
        }
    }
}

impl Error for ParseError {}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Errors from an end-to-end solve (parse, traverse, write).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The input could not be parsed into a grid.
    Parse(ParseError),
    /// Writing a render or report to the output sink failed.
    Output {
        /// Kind of the I/O failure.
        kind: io::ErrorKind,
        /// The I/O error's message.
        message: String,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed input: {err}"),
            Self::Output { kind, message } => {
                write!(f, "failed to write output ({kind:?}): {message}")
            }
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Output { .. } => None,
        }
    }
}

impl From<ParseError> for SolveError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<io::Error> for SolveError {
    fn from(err: io::Error) -> Self {
        Self::Output {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_row_message_names_line_and_widths() {
        let err = ParseError::RaggedRow {
            line: 3,
            expected: 4,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "line 3: expected 4 cells (width of first row), found 2"
        );
    }

    #[test]
    fn solve_error_chains_parse_source() {
        let err = SolveError::from(ParseError::Empty);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("maze input is empty"));
    }

    #[test]
    fn io_error_converts_with_kind() {
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        match SolveError::from(io) {
            SolveError::Output { kind, message } => {
                assert_eq!(kind, io::ErrorKind::BrokenPipe);
                assert_eq!(message, "closed");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
