//! Shared instance generation for the solver benchmarks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stowage_core::{Item, LoadRequest};

/// Seed used across benchmarks for reproducible instances.
pub const BENCHMARK_SEED: u64 = 42;

/// Generate a request with the harness's uniform ranges: values in `1..=20`,
/// volumes in `1..=10`.
pub fn generate_request(items: usize, capacity: u16, seed: u64) -> LoadRequest {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let items = (0..items)
        .map(|_| Item::new(rng.gen_range(1..=20), rng.gen_range(1..=10)))
        .collect();
    LoadRequest::new(capacity, items)
}
