//! Error types emitted by the stowage CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers all return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::path::PathBuf;

use stowage_core::{PlanViolation, SolveError};
use thiserror::Error;

/// Errors emitted by the stowage CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// Opening the request file failed.
    #[error("failed to open load request at {path:?}: {source}")]
    OpenRequest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The request file held malformed JSON.
    #[error("failed to parse load request at {path:?}: {source}")]
    ParseRequest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A backend refused the request.
    #[error("solver failed: {0}")]
    Solve(#[from] SolveError),
    /// A solved plan failed post-verification.
    #[error("{solver} produced an inconsistent plan: {source}")]
    InconsistentPlan {
        solver: &'static str,
        #[source]
        source: PlanViolation,
    },
    /// Serialising the response failed.
    #[error("failed to serialise solve response: {0}")]
    SerialiseResponse(serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(std::io::Error),
}
