//! Facade crate for the stowage load-planning engine.
//!
//! This crate re-exports the core domain types and exposes the solver
//! implementations behind feature flags.

#![forbid(unsafe_code)]

pub use stowage_core::{
    Diagnostics, ExactSolver, Item, LoadPlan, LoadRequest, LoadRequestError, PlanViolation,
    SolveError, SolveResponse, Solver,
};

#[cfg(feature = "solver-dp")]
pub use stowage_solver_dp::{ExhaustiveSolver, MemoSolver};

#[cfg(feature = "solver-greedy")]
pub use stowage_solver_greedy::GreedySolver;

#[cfg(feature = "solver-milp")]
pub use stowage_solver_milp::MilpSolver;
