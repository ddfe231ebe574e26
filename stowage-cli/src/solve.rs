//! Solve command implementation for the stowage CLI.

use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use stowage_core::{LoadRequest, SolveResponse, Solver};
use stowage_solver_dp::{ExhaustiveSolver, MemoSolver};
use stowage_solver_greedy::GreedySolver;

use crate::CliError;

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Parser)]
#[command(
    long_about = "Solve a load request provided as a JSON file with a \
                  `capacity` field and an `items` list of value/volume \
                  pairs. The chosen backend's plan and diagnostics are \
                  written to stdout as JSON.",
    about = "Solve a JSON load request"
)]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing a LoadRequest.
    #[arg(value_name = "path")]
    pub(crate) request_path: PathBuf,
    /// Backend used to produce the plan.
    #[arg(long, value_enum, default_value = "memo")]
    pub(crate) solver: Backend,
}

/// Selectable solver backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Backend {
    /// Brute-force exact search.
    Exhaustive,
    /// Memoised exact search.
    Memo,
    /// Ratio-greedy heuristic.
    Greedy,
    /// External mixed-integer-programming backend.
    Milp,
}

impl Backend {
    /// Instantiate the chosen backend.
    pub(crate) fn build(self) -> Result<Box<dyn Solver>, CliError> {
        match self {
            Self::Exhaustive => Ok(Box::new(ExhaustiveSolver)),
            Self::Memo => Ok(Box::new(MemoSolver)),
            Self::Greedy => Ok(Box::new(GreedySolver)),
            #[cfg(feature = "solver-milp")]
            Self::Milp => Ok(Box::new(stowage_solver_milp::MilpSolver)),
            #[cfg(not(feature = "solver-milp"))]
            Self::Milp => Err(CliError::MissingFeature {
                feature: "solver-milp",
                action: "the milp backend",
            }),
        }
    }
}

pub(crate) fn run_solve(args: &SolveArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let request = load_request(&args.request_path)?;
    let solver = args.solver.build()?;
    let response = solver.solve(&request)?;
    write_response(writer, &response)
}

/// Loads a JSON-encoded [`LoadRequest`] from disk.
fn load_request(path: &Path) -> Result<LoadRequest, CliError> {
    let file = std::fs::File::open(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_response(writer: &mut dyn Write, response: &SolveResponse) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
