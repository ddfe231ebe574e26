//! Load plans and plan verification.

use std::collections::HashSet;

use thiserror::Error;

use crate::LoadRequest;

/// The outcome of a solve: which items to stow and what the load is worth.
///
/// `selected` is a subset of `0..items.len()` in solver-internal order; the
/// order carries no meaning beyond membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadPlan {
    /// Sum of the selected items' values.
    pub total_value: u64,
    /// Indices of the selected items.
    pub selected: Vec<usize>,
}

impl LoadPlan {
    /// The plan that stows nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            total_value: 0,
            selected: Vec::new(),
        }
    }
}

/// Ways a [`LoadPlan`] can fail verification against its request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanViolation {
    /// An index appears more than once in the selection.
    #[error("item {index} is selected more than once")]
    DuplicateIndex {
        /// The repeated index.
        index: usize,
    },
    /// An index is outside the request's item range.
    #[error("item {index} is out of bounds for {items} items")]
    UnknownIndex {
        /// The offending index.
        index: usize,
        /// Number of items in the request.
        items: usize,
    },
    /// The selection's volume exceeds the hold capacity.
    #[error("selected volume {volume} exceeds capacity {capacity}")]
    OverCapacity {
        /// Total volume of the selection.
        volume: u64,
        /// The request's capacity.
        capacity: u16,
    },
    /// The plan's declared total differs from the selection's worth.
    #[error("declared value {declared} but selection is worth {computed}")]
    ValueMismatch {
        /// Value the plan claims.
        declared: u64,
        /// Value recomputed from the selected items.
        computed: u64,
    },
}

impl LoadRequest {
    /// Check a plan against this request.
    ///
    /// A plan passes when its indices are unique and in range, the selected
    /// volume fits the capacity, and the declared total matches the selected
    /// items' values. Every backend's output must pass; the check is cheap
    /// enough for callers to run routinely.
    pub fn verify(&self, plan: &LoadPlan) -> Result<(), PlanViolation> {
        let mut seen = HashSet::with_capacity(plan.selected.len());
        let mut volume = 0_u64;
        let mut computed = 0_u64;
        for &index in &plan.selected {
            let Some(item) = self.items.get(index) else {
                return Err(PlanViolation::UnknownIndex {
                    index,
                    items: self.items.len(),
                });
            };
            if !seen.insert(index) {
                return Err(PlanViolation::DuplicateIndex { index });
            }
            volume += u64::from(item.volume);
            computed += u64::from(item.value);
        }
        if volume > u64::from(self.capacity) {
            return Err(PlanViolation::OverCapacity {
                volume,
                capacity: self.capacity,
            });
        }
        if computed != plan.total_value {
            return Err(PlanViolation::ValueMismatch {
                declared: plan.total_value,
                computed,
            });
        }
        Ok(())
    }
}
