#![deny(unsafe_code)]
//! Spatially incoherent white noise kernel.
//!
//! Every sample is an independent uniform draw in [-1, 1] from the seeded
//! generator; coordinates are ignored entirely, so there is no lattice,
//! no permutation table, and no spatial coherence. The draw order is the
//! kernel's determinism contract: two same-seeded kernels produce
//! identical streams only when sampled in the same sequence, which is why
//! the compositor keeps its traversal order fixed.

use noisefield_core::error::NoiseError;
use noisefield_core::kernel::NoiseKernel;
use noisefield_core::prng::Xorshift64;

/// White noise kernel. Owns the seeded generator it consumes per sample.
#[derive(Debug, Clone)]
pub struct WhiteNoise {
    rng: Xorshift64,
}

impl WhiteNoise {
    /// Builds the kernel with its generator seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xorshift64::new(seed),
        }
    }
}

impl NoiseKernel for WhiteNoise {
    fn name(&self) -> &'static str {
        "white"
    }

    fn sample2(&mut self, _x: f64, _y: f64) -> f64 {
        self.rng.next_signed_unit()
    }

    fn sample3(&mut self, _x: f64, _y: f64, _z: f64) -> Result<f64, NoiseError> {
        Ok(self.rng.next_signed_unit())
    }
}
