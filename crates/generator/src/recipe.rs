//! Reproducible specification for one noise synthesis run.
//!
//! A [`Recipe`] captures everything needed to regenerate a field:
//! kernel name, rank, extent, seed, and fractal parameter overrides.
//! Two equal recipes fed to [`crate::generate`] produce bit-identical
//! fields.

use noisefield_core::error::NoiseError;
use noisefield_core::field::{Rank, MIN_SIZE};
use serde::{Deserialize, Serialize};

/// Serializable description of a noise synthesis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Kernel name (see [`crate::KernelKind::list_kernels`]).
    pub kernel: String,
    /// Field rank: 1, 2, or 3.
    pub rank: u8,
    /// Extent of every field axis.
    pub size: usize,
    /// Seed for the kernel's permutation table or generator.
    pub seed: u64,
    /// Fractal and kernel parameter overrides as a JSON object
    /// (`scale`, `octaves`, `lacunarity`, `persistence`, `interpolation`).
    pub params: serde_json::Value,
}

impl Recipe {
    /// Creates a recipe with an empty params object.
    pub fn new(kernel: &str, rank: u8, size: usize, seed: u64) -> Self {
        Self {
            kernel: kernel.to_string(),
            rank,
            size,
            seed,
            params: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Checks rank and size without constructing anything.
    pub fn validate(&self) -> Result<(), NoiseError> {
        Rank::try_from(self.rank)?;
        if self.size < MIN_SIZE {
            return Err(NoiseError::InvalidSize {
                size: self.size,
                min: MIN_SIZE,
            });
        }
        Ok(())
    }
}
