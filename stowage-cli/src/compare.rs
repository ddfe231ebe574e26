//! Compare command implementation for the stowage CLI.
//!
//! Reconstructs the original benchmark drill: generate a seeded random
//! shipment, run every available backend on it, verify each plan against
//! the request, and report value, solve time, and the chosen items.

use std::io::Write;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stowage_core::{Item, LoadRequest, Solver};
use stowage_solver_dp::{ExhaustiveSolver, MemoSolver, PRACTICAL_ITEM_CEILING};
use stowage_solver_greedy::GreedySolver;

use crate::CliError;

/// Value range of generated items, as in the original drill.
const VALUE_RANGE: std::ops::RangeInclusive<u32> = 1..=20;
/// Volume range of generated items, as in the original drill.
const VOLUME_RANGE: std::ops::RangeInclusive<u16> = 1..=10;

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Parser)]
#[command(
    long_about = "Generate a seeded random shipment and race every available \
                  backend on it. Each plan is verified against the request \
                  before it is reported. The exhaustive backend is skipped \
                  above its practical size ceiling.",
    about = "Race every backend on a random shipment"
)]
pub(crate) struct CompareArgs {
    /// Number of items to generate.
    #[arg(long, value_name = "count", default_value_t = 50)]
    pub(crate) items: usize,
    /// Hold capacity.
    #[arg(long, value_name = "volume", default_value_t = 15)]
    pub(crate) capacity: u16,
    /// Seed for the shipment generator.
    #[arg(long, value_name = "seed", default_value_t = 42)]
    pub(crate) seed: u64,
    /// Largest shipment the exhaustive backend is attempted on.
    #[arg(long, value_name = "count", default_value_t = PRACTICAL_ITEM_CEILING)]
    pub(crate) max_exhaustive_items: usize,
}

pub(crate) fn run_compare(args: &CompareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let request = generate_request(args.items, args.capacity, args.seed);
    writeln!(
        writer,
        "shipment: {} items, capacity {}, seed {}",
        args.items, args.capacity, args.seed
    )
    .map_err(CliError::WriteOutput)?;

    if request.items.len() > args.max_exhaustive_items {
        log::warn!(
            "skipping exhaustive backend: {} items exceed the ceiling of {}",
            request.items.len(),
            args.max_exhaustive_items
        );
        writeln!(
            writer,
            "exhaustive: skipped ({} items > ceiling {})",
            request.items.len(),
            args.max_exhaustive_items
        )
        .map_err(CliError::WriteOutput)?;
    }

    for (name, solver) in roster(args, &request) {
        report(name, solver.as_ref(), &request, writer)?;
    }
    Ok(())
}

/// The backends to race, in the original drill's order.
fn roster(args: &CompareArgs, request: &LoadRequest) -> Vec<(&'static str, Box<dyn Solver>)> {
    let mut solvers: Vec<(&'static str, Box<dyn Solver>)> = Vec::new();
    if request.items.len() <= args.max_exhaustive_items {
        solvers.push(("exhaustive", Box::new(ExhaustiveSolver)));
    }
    solvers.push(("memo", Box::new(MemoSolver)));
    #[cfg(feature = "solver-milp")]
    solvers.push(("milp", Box::new(stowage_solver_milp::MilpSolver)));
    solvers.push(("greedy", Box::new(GreedySolver)));
    solvers
}

fn report(
    name: &'static str,
    solver: &dyn Solver,
    request: &LoadRequest,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = solver.solve(request)?;
    request
        .verify(&response.plan)
        .map_err(|source| CliError::InconsistentPlan { solver: name, source })?;

    // Sorting the indices is purely presentational.
    let mut selected = response.plan.selected.clone();
    selected.sort_unstable();
    writeln!(
        writer,
        "{name:>10}: value {value}, solved in {time:?}, items {selected:?}",
        value = response.plan.total_value,
        time = response.diagnostics.solve_time,
    )
    .map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Generate a shipment with the original drill's uniform ranges.
fn generate_request(items: usize, capacity: u16, seed: u64) -> LoadRequest {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let items = (0..items)
        .map(|_| Item::new(rng.gen_range(VALUE_RANGE), rng.gen_range(VOLUME_RANGE)))
        .collect();
    LoadRequest::new(capacity, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn args(items: usize) -> CompareArgs {
        CompareArgs {
            items,
            capacity: 15,
            seed: 42,
            max_exhaustive_items: PRACTICAL_ITEM_CEILING,
        }
    }

    #[rstest]
    fn generation_is_deterministic_per_seed() {
        let first = generate_request(20, 15, 7);
        let second = generate_request(20, 15, 7);
        assert_eq!(first, second);
        let other_seed = generate_request(20, 15, 8);
        assert_ne!(first, other_seed);
    }

    #[rstest]
    fn roster_skips_exhaustive_on_large_shipments() {
        let request = generate_request(60, 15, 42);
        let names: Vec<&str> = roster(&args(60), &request)
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert!(!names.contains(&"exhaustive"));
        assert!(names.contains(&"memo"));
        assert!(names.contains(&"greedy"));
    }

    #[rstest]
    fn compare_reports_every_raced_backend() {
        let mut out = Vec::new();
        run_compare(&args(12), &mut out).expect("compare succeeds");
        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.contains("exhaustive:"));
        assert!(text.contains("memo:"));
        assert!(text.contains("greedy:"));
        assert!(text.contains("shipment: 12 items"));
    }

    #[rstest]
    fn exact_backends_agree_on_the_drill() {
        let request = generate_request(15, 15, 42);
        let memo = MemoSolver.solve(&request).expect("memo solve");
        let exhaustive = ExhaustiveSolver.solve(&request).expect("exhaustive solve");
        assert_eq!(memo.plan.total_value, exhaustive.plan.total_value);
    }
}
