//! Mixed-integer-programming solver adapter for the stowage engine.
//!
//! This crate wraps `good_lp` (with its pure-Rust `microlp` backend) behind
//! the [`Solver`](stowage_core::Solver) contract. The model is the textbook
//! 0/1 knapsack formulation: one binary variable per item, maximise the
//! value-weighted sum subject to a single volume constraint. The adapter
//! contributes no optimisation logic of its own — it translates the request
//! into the model, runs the solve, and translates the assignment back into
//! a [`LoadPlan`](stowage_core::LoadPlan), surfacing any backend failure as
//! [`SolveError::Backend`](stowage_core::SolveError).

#![forbid(unsafe_code)]

use std::time::Instant;

use good_lp::{Expression, Solution, SolverModel, Variable, constraint, microlp, variable, variables};
use stowage_core::{
    Diagnostics, ExactSolver, LoadPlan, LoadRequest, SolveError, SolveResponse, Solver,
};

/// A variable assignment at or above this threshold counts as "selected".
///
/// The backend reports binary variables as floats; anything past one half is
/// unambiguously a 1 under its integrality tolerance.
const SELECTION_THRESHOLD: f64 = 0.5;

/// Exact solver delegating to the `good_lp` integer-programming stack.
///
/// Equivalent in results to the native exact backends; useful as an
/// independent engine for cross-checking them, since it shares none of
/// their code.
#[derive(Debug, Default, Clone, Copy)]
pub struct MilpSolver;

impl Solver for MilpSolver {
    fn solve(&self, request: &LoadRequest) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();

        // Degenerate holds never reach the backend.
        let plan = if request.items.is_empty() || request.capacity == 0 {
            LoadPlan::empty()
        } else {
            solve_model(request)?
        };

        Ok(SolveResponse {
            plan,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                subproblems_explored: request.items.len() as u64,
            },
        })
    }
}

impl ExactSolver for MilpSolver {}

#[expect(
    clippy::float_arithmetic,
    reason = "the backend models objectives and constraints over f64"
)]
fn solve_model(request: &LoadRequest) -> Result<LoadPlan, SolveError> {
    let mut model_vars = variables!();
    let selections: Vec<Variable> = request
        .items
        .iter()
        .map(|_| model_vars.add(variable().binary()))
        .collect();

    let objective: Expression = selections
        .iter()
        .zip(&request.items)
        .map(|(&var, item)| var * f64::from(item.value))
        .sum();
    let load: Expression = selections
        .iter()
        .zip(&request.items)
        .map(|(&var, item)| var * f64::from(item.volume))
        .sum();

    let solution = model_vars
        .maximise(objective)
        .using(microlp)
        .with(constraint!(load <= f64::from(request.capacity)))
        .solve()
        .map_err(|err| {
            log::warn!("milp backend rejected the model: {err}");
            SolveError::Backend {
                message: err.to_string(),
            }
        })?;

    // Read the assignment back and recompute the total from the integer item
    // values, so the reported optimum never depends on float round-trips.
    let mut plan = LoadPlan::empty();
    for (index, (&var, item)) in selections.iter().zip(&request.items).enumerate() {
        if solution.value(var) > SELECTION_THRESHOLD {
            plan.total_value += u64::from(item.value);
            plan.selected.push(index);
        }
    }
    Ok(plan)
}
