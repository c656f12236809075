//! # tsp-exact
//!
//! Reads a JSON problem (a cost matrix or a point set), solves it exactly and
//! prints the optimal tour.
//!
//!     tsp-exact problem.json
//!     tsp-exact --strategy branch_and_bound --threads 4 problem.json
//!     cat problem.json | tsp-exact --json -

mod logging;

use std::error::Error;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use tsp_core::ProblemInput;
use tsp_solver::{SolverConfig, SolverSelector, Strategy, TourResult};

use logging::{init_logger, LogFormat};

/// Exit status when the solve ran but the graph has no Hamiltonian cycle.
const EXIT_NO_TOUR: u8 = 2;
const EXIT_ERROR: u8 = 1;

#[derive(Parser)]
#[command(name = "tsp-exact")]
#[command(about = "Exact Traveling-Salesman solver (branch-and-bound / Held-Karp)")]
#[command(long_about = "Solves a TSP instance to optimality.

Input is JSON, either a cost matrix (null marks a missing edge):
  { \"costs\": [[0, 3, 4], [3, 0, 5], [4, 5, 0]] }
or a point set with a metric (euclidean, att, great_circle):
  { \"points\": [{ \"x\": 0, \"y\": 0 }, { \"x\": 3, \"y\": 4 }], \"metric\": \"euclidean\" }

Exits with 2 when no tour exists and 1 on any error.")]
struct Cli {
    /// Problem file, or "-" for stdin
    input: PathBuf,

    /// auto, branch_and_bound, held_karp, held_karp_memoized or brute_force
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// JSON solver configuration; command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Branch-and-bound worker threads
    #[arg(short, long)]
    threads: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,

    /// Prefix log lines with a millisecond timestamp
    #[arg(long)]
    log_timestamp: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logger(&cli) {
        eprintln!("logger init failed: {e}");
        return ExitCode::from(EXIT_ERROR);
    }

    let outcome = run(&cli, io::stdin().lock(), &mut io::stdout().lock());
    if let Err(e) = &outcome {
        eprintln!("error: {e}");
    }
    ExitCode::from(exit_status(&outcome))
}

fn exit_status(outcome: &Result<TourResult, Box<dyn Error>>) -> u8 {
    match outcome {
        Ok(result) if result.is_feasible() => 0,
        Ok(_) => EXIT_NO_TOUR,
        Err(_) => EXIT_ERROR,
    }
}

/// Loads the configuration and the problem, solves it and writes the result to `out`.
/// `stdin` is only read when the input path is `-`.
fn run(cli: &Cli, stdin: impl Read, out: &mut impl Write) -> Result<TourResult, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
    config.validate()?;

    let input = if cli.input.as_os_str() == "-" {
        ProblemInput::from_reader(stdin)?
    } else {
        ProblemInput::from_path(&cli.input)?
    };
    let matrix = input.into_matrix()?;
    log::info!(
        "loaded {} cities from {}",
        matrix.len(),
        cli.input.display()
    );

    let result = SolverSelector::new(config).solve(&matrix)?;

    if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        writeln!(out, "{result}")?;
    }
    Ok(result)
}
