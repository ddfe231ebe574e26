//! Brute-force exact solver.

use std::time::Instant;

use stowage_core::{
    Diagnostics, ExactSolver, Item, LoadPlan, LoadRequest, SolveError, SolveResponse, Solver,
};

/// Item count beyond which an exhaustive solve is unlikely to finish within
/// a second on current hardware.
pub const PRACTICAL_ITEM_CEILING: usize = 25;

/// Exact solver enumerating every include/exclude decision.
///
/// Runtime doubles with each item, so this backend is the correctness
/// baseline the cheaper ones are checked against rather than a production
/// engine. Past [`PRACTICAL_ITEM_CEILING`] items, expect multi-second
/// solves; harnesses should switch to [`MemoSolver`](crate::MemoSolver)
/// there. Recursion depth is bounded by the item count.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSolver;

impl Solver for ExhaustiveSolver {
    fn solve(&self, request: &LoadRequest) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        if request.items.len() > PRACTICAL_ITEM_CEILING {
            log::warn!(
                "exhaustive search over {} items; expect exponential solve time",
                request.items.len()
            );
        }
        let mut search = ExhaustiveSearch {
            items: &request.items,
            explored: 0,
        };
        let plan = search.best_plan(request.items.len(), request.capacity);
        Ok(SolveResponse {
            plan,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                subproblems_explored: search.explored,
            },
        })
    }
}

impl ExactSolver for ExhaustiveSolver {}

struct ExhaustiveSearch<'a> {
    items: &'a [Item],
    explored: u64,
}

impl ExhaustiveSearch<'_> {
    /// Best plan over the first `n` items with `capacity` volume left.
    fn best_plan(&mut self, n: usize, capacity: u16) -> LoadPlan {
        self.explored += 1;
        if n == 0 || capacity == 0 {
            return LoadPlan::empty();
        }
        let Some(item) = self.items.get(n - 1) else {
            return LoadPlan::empty();
        };
        if item.volume > capacity {
            return self.best_plan(n - 1, capacity);
        }

        let mut included = self.best_plan(n - 1, capacity - item.volume);
        included.total_value += u64::from(item.value);
        included.selected.push(n - 1);
        let excluded = self.best_plan(n - 1, capacity);

        // Ties go to the excluded branch.
        if included.total_value > excluded.total_value {
            included
        } else {
            excluded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stowage_core::test_support::{
        REFERENCE_OPTIMUM, reference_request, request_from_pairs,
    };

    #[rstest]
    fn empty_item_set_stows_nothing() {
        let request = request_from_pairs(10, &[]);
        let response = ExhaustiveSolver.solve(&request).expect("solve");
        assert_eq!(response.plan, LoadPlan::empty());
    }

    #[rstest]
    fn zero_capacity_stows_nothing() {
        let request = request_from_pairs(0, &[(7, 3), (9, 4)]);
        let response = ExhaustiveSolver.solve(&request).expect("solve");
        assert_eq!(response.plan, LoadPlan::empty());
    }

    #[rstest]
    fn finds_the_reference_optimum() {
        let request = reference_request();
        let response = ExhaustiveSolver.solve(&request).expect("solve");
        assert_eq!(response.plan.total_value, REFERENCE_OPTIMUM);
        request.verify(&response.plan).expect("plan is consistent");
    }

    #[rstest]
    fn skips_items_larger_than_the_hold() {
        let request = request_from_pairs(4, &[(100, 9), (3, 2)]);
        let response = ExhaustiveSolver.solve(&request).expect("solve");
        assert_eq!(response.plan.total_value, 3);
        assert_eq!(response.plan.selected, vec![1]);
    }

    #[rstest]
    fn value_ties_prefer_the_excluded_branch() {
        // Both items are interchangeable; the strict comparison keeps the
        // earlier one.
        let request = request_from_pairs(3, &[(5, 3), (5, 3)]);
        let response = ExhaustiveSolver.solve(&request).expect("solve");
        assert_eq!(response.plan.total_value, 5);
        assert_eq!(response.plan.selected, vec![0]);
    }

    #[rstest]
    fn explores_every_decision_node() {
        // Two items that always fit: 1 root + 2 + 4 leaf calls.
        let request = request_from_pairs(10, &[(1, 1), (2, 1)]);
        let response = ExhaustiveSolver.solve(&request).expect("solve");
        assert_eq!(response.diagnostics.subproblems_explored, 7);
    }
}
