//! Sampling strategies for drawing distinct numbers from a bounded domain.
//!
//! This module defines the [`NumberSampling`] trait used by the reveal pipeline
//! to produce the final set of a draw before any frame is shown, plus the
//! default [`PartialShuffleSampling`] strategy.
use rand::RngCore;

use crate::error::{Error, Result};

pub mod partial_shuffle;

pub use partial_shuffle::PartialShuffleSampling;

/// Trait for drawing `count` distinct numbers out of `1..=domain_max`.
///
/// Implementations must return the numbers sorted ascending and must reject
/// parameters outside `1 <= count <= domain_max` with
/// [`Error::InvalidDrawParameters`].
pub trait NumberSampling: Send + Sync {
    fn generate(&self, domain_max: u32, count: u32, rng: &mut dyn RngCore) -> Result<Vec<u32>>;
}

/// Draw `count` distinct numbers from `1..=domain_max` using the default strategy.
pub fn sample(domain_max: u32, count: u32, rng: &mut impl RngCore) -> Result<Vec<u32>> {
    PartialShuffleSampling.generate(domain_max, count, rng)
}

/// Checks the draw precondition `1 <= count <= domain_max`.
pub fn validate_draw(domain_max: u32, count: u32) -> Result<()> {
    if count == 0 || count > domain_max {
        return Err(Error::InvalidDrawParameters { domain_max, count });
    }
    Ok(())
}

/// Index in `[0, bound)` from one 32-bit draw (multiply-shift reduction).
#[inline]
pub(crate) fn rand_below(rng: &mut dyn RngCore, bound: usize) -> usize {
    debug_assert!(bound > 0, "bound must be > 0");
    ((rng.next_u32() as u64 * bound as u64) >> 32) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand_below_zero_input_maps_to_zero() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand_below(&mut rng, 45), 0);
    }

    #[test]
    fn rand_below_max_input_maps_to_last_index() {
        let mut rng = FixedRng { value: u32::MAX };
        assert_eq!(rand_below(&mut rng, 45), 44);
        assert_eq!(rand_below(&mut rng, 1), 0);
    }

    #[test]
    fn rand_below_midpoint_maps_to_middle() {
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };
        assert_eq!(rand_below(&mut rng, 10), 4);
    }

    #[test]
    fn validate_draw_rejects_out_of_range_counts() {
        assert!(validate_draw(45, 6).is_ok());
        assert!(validate_draw(1, 1).is_ok());
        assert!(validate_draw(45, 45).is_ok());
        assert!(matches!(
            validate_draw(45, 0),
            Err(Error::InvalidDrawParameters {
                domain_max: 45,
                count: 0
            })
        ));
        assert!(matches!(
            validate_draw(5, 6),
            Err(Error::InvalidDrawParameters { .. })
        ));
        assert!(validate_draw(0, 0).is_err());
    }
}
