//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! The bit-exact stream of this generator is part of the reproducibility
//! contract: permutation tables and white-noise fills are only identical
//! across runs because this exact algorithm, with these exact shift
//! constants, consumes draws in a fixed order. Pure integer arithmetic,
//! so the sequence is stable across platforms.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG with shift parameters (13, 7, 17).
///
/// Same seed always produces the same sequence. A seed of 0 is replaced
/// with a non-zero fallback, since 0 is a fixed point of xorshift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Substitute for seed 0, the all-zeros fixed point.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a generator seeded with `seed` (0 is replaced by a fallback).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniform f64 in [0, 1), using the upper 53 bits for
    /// full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniform f64 in [-1, 1). One draw per call.
    pub fn next_signed_unit(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }

    /// Returns a uniform usize in [0, max) by modulo reduction.
    ///
    /// The bias for non-power-of-two `max` is negligible at 64-bit state
    /// width for the small moduli used here (shuffle indices <= 256).
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_matches_golden_value_for_seed_42() {
        // Pinned output of xorshift64(seed=42, shifts=13,7,17). If this
        // changes, every seeded table and recipe output changes with it.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_is_replaced_and_never_sticks_at_zero() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn identical_seeds_yield_identical_streams() {
        let mut a = Xorshift64::new(0xCAFE);
        let mut b = Xorshift64::new(0xCAFE);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "streams diverged at {i}");
        }
    }

    #[test]
    fn next_signed_unit_stays_in_signed_unit_interval() {
        let mut rng = Xorshift64::new(7);
        for i in 0..10_000 {
            let v = rng.next_signed_unit();
            assert!((-1.0..1.0).contains(&v), "value {v} out of range at {i}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v));
                }
            }

            #[test]
            fn next_usize_below_max_for_any_seed(seed: u64, max in 1_usize..10_000) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    prop_assert!(rng.next_usize(max) < max);
                }
            }
        }
    }
}
