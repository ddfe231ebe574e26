//! The facade crate exposes the full engine surface.

use rstest::rstest;
use stowage_engine::{GreedySolver, Item, LoadRequest, MemoSolver, Solver};

#[rstest]
fn engine_types_solve_through_the_facade() {
    let request = LoadRequest::new(10, vec![Item::new(7, 3), Item::new(9, 4)]);
    let memo = MemoSolver.solve(&request).expect("memo solve");
    let greedy = GreedySolver.solve(&request).expect("greedy solve");
    assert_eq!(memo.plan.total_value, 16);
    assert_eq!(greedy.plan.total_value, 16);
}
