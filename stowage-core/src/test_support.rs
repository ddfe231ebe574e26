//! Test-only fixtures shared by the solver crates' suites.

use crate::{Item, LoadRequest};

/// Optimal total value of [`reference_request`], computed by dynamic
/// programming and pinned as the regression baseline.
pub const REFERENCE_OPTIMUM: u64 = 34;

/// Total value the ratio-greedy heuristic reaches on
/// [`reference_request`].
pub const REFERENCE_GREEDY_VALUE: u64 = 33;

/// Build a request from `(value, volume)` pairs.
#[must_use]
pub fn request_from_pairs(capacity: u16, pairs: &[(u32, u16)]) -> LoadRequest {
    let items = pairs
        .iter()
        .map(|&(value, volume)| Item::new(value, volume))
        .collect();
    LoadRequest::new(capacity, items)
}

/// The reference shipment used across the suites.
///
/// One optimal load is items `{0, 1, 5, 6}`: volumes `3+4+3+5 = 15`, values
/// `7+9+6+12 = 34`.
#[must_use]
pub fn reference_request() -> LoadRequest {
    request_from_pairs(
        15,
        &[(7, 3), (9, 4), (5, 2), (12, 6), (14, 7), (6, 3), (12, 5)],
    )
}
