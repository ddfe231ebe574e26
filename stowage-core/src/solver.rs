//! The solver contract shared by every backend.

use std::time::Duration;

use thiserror::Error;

use crate::{LoadPlan, LoadRequest, LoadRequestError};

/// Measurements captured while producing a plan.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent inside [`Solver::solve`].
    pub solve_time: Duration,
    /// How many subproblems (or candidates) the backend examined.
    pub subproblems_explored: u64,
}

/// Response from a successful solve.
///
/// Contains the chosen [`LoadPlan`] and the backend's [`Diagnostics`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// The chosen plan.
    pub plan: LoadPlan,
    /// How the backend got there.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The request was malformed.
    #[error("invalid load request: {0}")]
    InvalidRequest(#[from] LoadRequestError),
    /// The optimisation backend reported a failure of its own.
    #[error("optimisation backend failed: {message}")]
    Backend {
        /// Backend-reported failure description.
        message: String,
    },
}

/// Select a subset of items maximising value within the hold capacity.
///
/// Implementations are pure with respect to the request: the same input
/// yields the same `total_value` on every call, and failures surface as
/// [`SolveError`] rather than panics. Solvers must be `Send + Sync` to
/// operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a plan or an error.
    fn solve(&self, request: &LoadRequest) -> Result<SolveResponse, SolveError>;
}

/// Marker for backends guaranteed to return the global optimum.
///
/// Callers needing exactness — cross-checks, regression baselines — can be
/// generic over this trait and stay agnostic to the concrete engine behind
/// it.
pub trait ExactSolver: Solver {}
