//! Property-based agreement between the native exact backends.
//!
//! # Invariants tested
//!
//! - **Identical plans:** `MemoSolver` and `ExhaustiveSolver` share the
//!   decomposition and tie-break, so even their selections coincide — not
//!   just the totals.
//! - **Work bound:** the memoised solve never computes more subproblems
//!   than the exhaustive one explores.
//! - **Feasibility:** the agreed plan verifies against its request.

use proptest::prelude::*;
use stowage_core::{Item, LoadRequest, Solver};
use stowage_solver_dp::{ExhaustiveSolver, MemoSolver};

/// Requests small enough for the exhaustive baseline; zero volumes are
/// allowed since both backends walk the identical recursion.
fn request_strategy() -> impl Strategy<Value = LoadRequest> {
    let item = (0_u32..=20, 0_u16..=10).prop_map(|(value, volume)| Item::new(value, volume));
    (0_u16..=30, proptest::collection::vec(item, 0..=12))
        .prop_map(|(capacity, items)| LoadRequest::new(capacity, items))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn memo_matches_exhaustive_exactly(request in request_strategy()) {
        let memo = MemoSolver.solve(&request).expect("memo solve");
        let exhaustive = ExhaustiveSolver.solve(&request).expect("exhaustive solve");

        prop_assert_eq!(&memo.plan, &exhaustive.plan);
        prop_assert!(
            memo.diagnostics.subproblems_explored
                <= exhaustive.diagnostics.subproblems_explored,
            "memoisation did more work ({}) than brute force ({})",
            memo.diagnostics.subproblems_explored,
            exhaustive.diagnostics.subproblems_explored
        );
        prop_assert!(request.verify(&memo.plan).is_ok());
    }
}
