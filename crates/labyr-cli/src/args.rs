//! Command-line flags.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use labyr_engine::SolveConfig;

/// Solve a grid maze from the top-left to the bottom-right cell.
///
/// The maze is read one row per line, cells separated by spaces:
/// `1` is a wall, `0` is open floor.
#[derive(Debug, Parser)]
#[command(name = "labyr", version, about)]
pub struct Cli {
    /// Pretty-print (display) the maze after reading
    #[arg(short = 'd')]
    pub display: bool,

    /// Print length of shortest path or 'No solution.'
    #[arg(short = 's')]
    pub steps: bool,

    /// Pretty-print maze with the path, if one exists
    #[arg(short = 'p')]
    pub path: bool,

    /// Read maze from INFILE [default: stdin]
    #[arg(short = 'i', value_name = "INFILE")]
    pub input: Option<PathBuf>,

    /// Write all output to OUTFILE [default: stdout]
    #[arg(short = 'o', value_name = "OUTFILE")]
    pub output: Option<PathBuf>,

    /// Log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The output selection for the solver.
    pub fn solve_config(&self) -> SolveConfig {
        SolveConfig {
            display: self.display,
            report_steps: self.steps,
            show_path: self.path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("labyr").chain(args.iter().copied()))
    }

    #[test]
    fn no_flags_is_silent_stdin_stdout() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.solve_config(), SolveConfig::default());
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn clustered_short_flags() {
        let cli = parse(&["-dsp"]).unwrap();
        assert_eq!(
            cli.solve_config(),
            SolveConfig {
                display: true,
                report_steps: true,
                show_path: true,
            }
        );
    }

    #[test]
    fn input_and_output_paths() {
        let cli = parse(&["-s", "-i", "maze.txt", "-o", "out.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("maze.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn input_flag_needs_a_value() {
        let err = parse(&["-i"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn unknown_flag_rejected() {
        let err = parse(&["-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn positional_rejected() {
        assert!(parse(&["maze.txt"]).is_err());
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = parse(&["-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn verbosity_counts() {
        assert_eq!(parse(&["-vv"]).unwrap().verbose, 2);
    }
}
