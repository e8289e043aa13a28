//! The `NoiseKernel` trait implemented by every noise variant.
//!
//! The trait is object-safe so the compositor and the dispatch layer can
//! work with `&mut dyn NoiseKernel` without knowing the concrete variant.

use crate::error::NoiseError;
use crate::field::Rank;

/// A coherent (or, for white noise, deliberately incoherent) scalar noise
/// source evaluated per coordinate.
///
/// Sampling takes `&mut self` because the white-noise kernel consumes one
/// generator draw per call; lattice kernels never mutate after
/// construction. A kernel is built from a seed and owns whatever seeded
/// state it needs (typically a permutation table).
///
/// Rank-1 sampling is `sample2(x, 0.0)` by convention, so the trait only
/// distinguishes the 2-D and 3-D entry points.
pub trait NoiseKernel {
    /// Stable kernel name used in error reports and dispatch.
    fn name(&self) -> &'static str;

    /// Evaluates the kernel at `(x, y)`. Every kernel supports this.
    fn sample2(&mut self, x: f64, y: f64) -> f64;

    /// Evaluates the kernel at `(x, y, z)`.
    ///
    /// Kernels without a 3-D variant return
    /// `NoiseError::UnsupportedRank` instead of silently projecting.
    fn sample3(&mut self, x: f64, y: f64, z: f64) -> Result<f64, NoiseError>;

    /// Whether the kernel can fill a field of the given rank. The default
    /// covers kernels with a full 3-D implementation.
    fn supports_rank(&self, _rank: Rank) -> bool {
        true
    }
}
