#![deny(unsafe_code)]
//! Core types for the noisefield procedural noise system.
//!
//! Provides the [`NoiseKernel`] trait, the rank-tagged [`Field`] container,
//! the seeded [`PermutationTable`] shared by all lattice kernels, the
//! [`Xorshift64`] PRNG whose bit-exact stream anchors reproducibility,
//! [`NoiseError`], and JSON parameter helpers.

pub mod error;
pub mod field;
pub mod kernel;
pub mod params;
pub mod permutation;
pub mod prng;

pub use error::NoiseError;
pub use field::{Field, Rank, MIN_SIZE};
pub use kernel::NoiseKernel;
pub use permutation::PermutationTable;
pub use prng::Xorshift64;
