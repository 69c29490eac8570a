//! Partial Fisher–Yates sampling of distinct numbers.
use rand::RngCore;
use tracing::trace;

use crate::error::Result;
use crate::sampling::{rand_below, validate_draw, NumberSampling};

/// Draws distinct numbers by shuffling only the first `count` slots of the
/// full population `1..=domain_max`.
///
/// Cost is `O(domain_max)` regardless of how unlucky the RNG is, unlike
/// rejection sampling which retries on duplicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialShuffleSampling;

impl NumberSampling for PartialShuffleSampling {
    fn generate(&self, domain_max: u32, count: u32, rng: &mut dyn RngCore) -> Result<Vec<u32>> {
        validate_draw(domain_max, count)?;

        let n = domain_max as usize;
        let k = count as usize;

        let mut pool: Vec<u32> = (1..=domain_max).collect();
        for i in 0..k {
            let j = i + rand_below(rng, n - i);
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool.sort_unstable();

        trace!("Sampled {k} of {n}: {pool:?}.");
        Ok(pool)
    }
}
