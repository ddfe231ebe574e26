//! Command-line harness for the stowage engine.
//!
//! Two subcommands: `compare` reconstructs the original benchmark drill — a
//! seeded random shipment raced through every available backend — and
//! `solve` answers a single JSON-encoded load request with a chosen backend.

#![forbid(unsafe_code)]

mod compare;
mod error;
mod solve;

use clap::{Parser, Subcommand};

pub use error::CliError;

/// Run the stowage CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    env_logger::init();
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Compare(args) => compare::run_compare(&args, &mut stdout),
        Command::Solve(args) => solve::run_solve(&args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "stowage",
    about = "Load-planning solvers for 0/1 knapsack shipments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Race every available backend on a random shipment.
    Compare(compare::CompareArgs),
    /// Solve a JSON-encoded load request with one backend.
    Solve(solve::SolveArgs),
}
