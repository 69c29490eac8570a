#![allow(dead_code)]
use std::time::Duration;

use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const SAMPLE_SIZE: usize = 50;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

/// `(domain_max, count)` pairs from the everyday 6-of-45 up to large domains.
pub const DRAW_SHAPES: [(u32, u32); 5] = [(45, 6), (49, 6), (90, 5), (1_000, 20), (100_000, 100)];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn draws_throughput(draws: usize) -> Throughput {
    Throughput::Elements(draws.max(1) as u64)
}

pub fn bench_rng(domain_max: u32, count: u32) -> StdRng {
    StdRng::seed_from_u64(0x10CC_u64 ^ ((domain_max as u64) << 16) ^ count as u64)
}
