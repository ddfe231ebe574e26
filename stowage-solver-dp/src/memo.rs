//! Memoised exact solver.

use std::time::Instant;

use stowage_core::{
    Diagnostics, ExactSolver, Item, LoadPlan, LoadRequest, SolveError, SolveResponse, Solver,
};

/// Exact solver memoising each `(items remaining, capacity remaining)`
/// subproblem.
///
/// Same decomposition and tie-break as
/// [`ExhaustiveSolver`](crate::ExhaustiveSolver), but each of the
/// `(n + 1) * (capacity + 1)` subproblems is solved at most once, making the
/// solve pseudo-polynomial in time and space. The memo table is allocated
/// per call, owned by that call alone, and dropped with it — it can never be
/// observed part-filled or reused against a different request.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoSolver;

impl Solver for MemoSolver {
    fn solve(&self, request: &LoadRequest) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        let mut search = MemoSearch {
            items: &request.items,
            memo: MemoTable::new(request.items.len(), request.capacity),
            computed: 0,
        };
        let plan = search.best_plan(request.items.len(), request.capacity);
        Ok(SolveResponse {
            plan,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                subproblems_explored: search.computed,
            },
        })
    }
}

impl ExactSolver for MemoSolver {}

/// Solved subproblems, one row per remaining item count.
struct MemoTable {
    rows: Vec<Vec<Option<LoadPlan>>>,
}

impl MemoTable {
    fn new(items: usize, capacity: u16) -> Self {
        let width = usize::from(capacity) + 1;
        Self {
            rows: vec![vec![None; width]; items + 1],
        }
    }

    fn get(&self, n: usize, capacity: u16) -> Option<&LoadPlan> {
        self.rows
            .get(n)
            .and_then(|row| row.get(usize::from(capacity)))
            .and_then(Option::as_ref)
    }

    /// Record a freshly solved subproblem. Entries are write-once; that
    /// discipline is what bounds the search to one solve per key.
    fn insert(&mut self, n: usize, capacity: u16, plan: &LoadPlan) {
        if let Some(slot) = self
            .rows
            .get_mut(n)
            .and_then(|row| row.get_mut(usize::from(capacity)))
        {
            debug_assert!(slot.is_none(), "memo entry ({n}, {capacity}) written twice");
            *slot = Some(plan.clone());
        }
    }
}

struct MemoSearch<'a> {
    items: &'a [Item],
    memo: MemoTable,
    computed: u64,
}

impl MemoSearch<'_> {
    fn best_plan(&mut self, n: usize, capacity: u16) -> LoadPlan {
        if let Some(plan) = self.memo.get(n, capacity) {
            return plan.clone();
        }
        self.computed += 1;
        let plan = self.solve_subproblem(n, capacity);
        self.memo.insert(n, capacity, &plan);
        plan
    }

    fn solve_subproblem(&mut self, n: usize, capacity: u16) -> LoadPlan {
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

        // Ties go to the excluded branch, as in the exhaustive baseline.
        if included.total_value > excluded.total_value {
            included
        } else {
            excluded
        }
    }
}
