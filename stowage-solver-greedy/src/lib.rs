//! Ratio-greedy approximate solver for the stowage engine.
//!
//! [`GreedySolver`] ranks items by value per unit of volume and fills the
//! hold in one pass. It trades the optimality guarantee of the exact
//! backends for an `O(n log n)` solve, and its total never exceeds theirs.

#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::time::Instant;

use stowage_core::{
    Diagnostics, Item, LoadPlan, LoadRequest, SolveError, SolveResponse, Solver,
};

/// Approximate solver selecting items in descending value/volume order.
///
/// Items are ranked by ratio and admitted whenever they still fit; an item
/// that does not fit is skipped permanently — there is no backtracking, so
/// the result carries no optimality guarantee. Zero-volume items rank ahead
/// of everything else (their ratio is effectively infinite), ordered among
/// themselves by descending value; equal ratios break by ascending index.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn solve(&self, request: &LoadRequest) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        let mut plan = LoadPlan::empty();

        // An empty hold stows nothing, zero-volume items included.
        if request.capacity > 0 {
            let zero_volume = request.items.iter().filter(|item| item.volume == 0).count();
            if zero_volume > 0 {
                log::warn!(
                    "{zero_volume} zero-volume item(s) present; they rank ahead of all others"
                );
            }

            let mut remaining = request.capacity;
            for (index, item) in ranked(&request.items) {
                if item.volume <= remaining {
                    remaining -= item.volume;
                    plan.total_value += u64::from(item.value);
                    plan.selected.push(index);
                }
            }
        }

        Ok(SolveResponse {
            plan,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                subproblems_explored: request.items.len() as u64,
            },
        })
    }
}

/// Items paired with their index, best ratio first.
fn ranked(items: &[Item]) -> Vec<(usize, &Item)> {
    let mut ranked: Vec<(usize, &Item)> = items.iter().enumerate().collect();
    ranked.sort_by(|(index_a, a), (index_b, b)| {
        ratio_ordering(b, a).then_with(|| index_a.cmp(index_b))
    });
    ranked
}

/// Compare two items by value/volume ratio.
///
/// The comparison cross-multiplies in `u64`, so it is exact where a
/// floating-point ratio would round, and a zero volume needs no special
/// arithmetic: it simply outranks every finite ratio.
fn ratio_ordering(a: &Item, b: &Item) -> Ordering {
    match (a.volume, b.volume) {
        (0, 0) => a.value.cmp(&b.value),
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        (volume_a, volume_b) => {
            let lhs = u64::from(a.value) * u64::from(volume_b);
            let rhs = u64::from(b.value) * u64::from(volume_a);
            lhs.cmp(&rhs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use stowage_core::test_support::{
        REFERENCE_GREEDY_VALUE, reference_request, request_from_pairs,
    };

    #[rstest]
    fn empty_item_set_stows_nothing() {
        let request = request_from_pairs(10, &[]);
        let response = GreedySolver.solve(&request).expect("solve");
        assert_eq!(response.plan, LoadPlan::empty());
    }

    #[rstest]
    fn zero_capacity_stows_nothing_even_with_zero_volume_items() {
        let request = request_from_pairs(0, &[(9, 0), (7, 3)]);
        let response = GreedySolver.solve(&request).expect("solve");
        assert_eq!(response.plan, LoadPlan::empty());
    }

    #[rstest]
    fn follows_descending_ratio_order_on_the_reference_shipment() {
        // Ratios: item 2 = 2.5, item 6 = 2.4, item 0 = 2.33, item 1 = 2.25,
        // then items 3, 4, 5 at 2.0. The first four fill 14 of 15 units and
        // nothing else fits.
        let request = reference_request();
        let response = GreedySolver.solve(&request).expect("solve");
        assert_eq!(response.plan.selected, vec![2, 6, 0, 1]);
        assert_eq!(response.plan.total_value, REFERENCE_GREEDY_VALUE);
        request.verify(&response.plan).expect("plan is consistent");
    }

    #[rstest]
    fn zero_volume_items_are_taken_first() {
        let request = request_from_pairs(3, &[(1, 3), (4, 0), (9, 0)]);
        let response = GreedySolver.solve(&request).expect("solve");
        // Higher value wins between the zero-volume pair.
        assert_eq!(response.plan.selected, vec![2, 1, 0]);
        assert_eq!(response.plan.total_value, 14);
    }

    #[rstest]
    fn equal_ratios_break_by_ascending_index() {
        let request = request_from_pairs(4, &[(4, 2), (2, 1), (8, 4)]);
        let response = GreedySolver.solve(&request).expect("solve");
        assert_eq!(response.plan.selected, vec![0, 1]);
    }

    #[rstest]
    fn skipped_items_stay_skipped() {
        // Item 0 has the best ratio, item 1 no longer fits after it, but the
        // smaller item 2 still does.
        let request = request_from_pairs(5, &[(9, 3), (6, 3), (2, 2)]);
        let response = GreedySolver.solve(&request).expect("solve");
        assert_eq!(response.plan.selected, vec![0, 2]);
        assert_eq!(response.plan.total_value, 11);
    }
}
