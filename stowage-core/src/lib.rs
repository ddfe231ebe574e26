//! Core domain types for the stowage engine.
//!
//! These models provide basic validation to keep downstream components
//! honest: requests are built through constructors that return `Result`,
//! and every solver communicates failure through [`SolveError`] rather
//! than panicking.

#![forbid(unsafe_code)]

mod item;
mod plan;
mod solver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use item::{Item, LoadRequest, LoadRequestError};
pub use plan::{LoadPlan, PlanViolation};
pub use solver::{Diagnostics, ExactSolver, SolveError, SolveResponse, Solver};
