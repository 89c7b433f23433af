//! `labyr`: shortest-path maze solver.
//!
//! ```text
//! labyr [-hdsp] [-i INFILE] [-o OUTFILE]
//! ```
//!
//! Reads a maze, finds the shortest route from the top-left to the
//! bottom-right cell with a breadth-first search, and prints any of: the
//! maze as read (`-d`), the route length (`-s`), the maze with the route
//! marked (`-p`). Logging goes to stderr and is controlled by `-v` or
//! `RUST_LOG`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use labyr_engine::{solve_parsed, Outcome};
use labyr_grid::Grid;
use tracing_subscriber::{fmt, EnvFilter};

mod args;
mod error;

use args::Cli;
use error::CliExitCode;

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn open_input(cli: &Cli) -> Result<Box<dyn BufRead>> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(cli: &Cli) -> Result<Box<dyn Write>> {
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = cli.solve_config();
    if !config.writes_anything() {
        tracing::info!("none of -d, -s, -p given; solving without output");
    }

    // The output file is only created once the maze has parsed, so a bad
    // maze never truncates an existing file.
    let grid = Grid::parse(open_input(cli)?).context("malformed input")?;
    let mut output = open_output(cli)?;
    let outcome = solve_parsed(&config, grid, &mut output).context("solve failed")?;
    tracing::info!(%outcome, "done");
    Ok(outcome)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = CliExitCode::from(&err);
            // Help and version go to stdout, usage errors to stderr. If that
            // write fails there is nowhere left to report it.
            let _ = err.print();
            return code.into();
        }
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(_) => CliExitCode::Success.into(),
        Err(err) => {
            tracing::error!(error = %err, "labyr failed");
            eprintln!("Error: {err:#}");
            CliExitCode::Failure.into()
        }
    }
}
