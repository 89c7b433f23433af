//! Process exit codes.
//!
//! - 0: the maze was read and processed, whether or not it has a solution
//! - 1: an input or output file could not be opened, or the maze is malformed
//! - 2: the command line could not be parsed

use std::process::ExitCode;

/// Exit status of the `labyr` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Normal completion, including "No solution."
    Success = 0,
    /// I/O or input failure.
    Failure = 1,
    /// Invalid flags; usage was printed to stderr.
    Usage = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&clap::Error> for CliExitCode {
    fn from(err: &clap::Error) -> Self {
        if err.use_stderr() {
            CliExitCode::Usage
        } else {
            CliExitCode::Success
        }
    }
}
