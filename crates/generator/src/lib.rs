#![deny(unsafe_code)]
//! Kernel dispatch and synthesis entry points for noisefield.
//!
//! This crate sits between `noisefield-core` (which defines the
//! [`NoiseKernel`] trait and [`Field`]) and the individual kernel crates.
//! The variant set is fixed and known at compile time, so dispatch is a
//! closed enum rather than a runtime registry: [`KernelKind`] wraps each
//! kernel and delegates trait methods, and [`generate`] drives the whole
//! pipeline from a serializable [`Recipe`].

pub mod fractal;
pub mod recipe;

#[cfg(feature = "png")]
pub mod heightmap;

use noisefield_core::error::NoiseError;
use noisefield_core::field::{Field, Rank};
use noisefield_core::kernel::NoiseKernel;
use noisefield_core::params::param_string;
use noisefield_gradient::GradientNoise;
use noisefield_simplex::SimplexNoise;
use noisefield_value::{Interpolation, ValueNoise};
use noisefield_white::WhiteNoise;
use serde_json::Value;

pub use fractal::{fill, FractalParams};
pub use recipe::Recipe;

/// All recognized kernel names.
const KERNEL_NAMES: &[&str] = &["gradient", "simplex", "value", "white"];

/// Default normalization bounds applied by [`generate_normalized`] callers
/// that keep the stock range.
pub const DEFAULT_LOWER: f64 = 0.0;
pub const DEFAULT_UPPER: f64 = 128.0;

/// Closed enumeration of the four noise kernels.
///
/// Use [`KernelKind::from_name`] for string-based construction (CLI,
/// recipes); each arm owns its fully seeded kernel instance.
#[derive(Debug)]
pub enum KernelKind {
    /// Perlin-style gradient noise.
    Gradient(GradientNoise),
    /// 2-D simplex noise.
    Simplex(SimplexNoise),
    /// Value noise (interpolation policy read from params).
    Value(ValueNoise),
    /// Spatially incoherent white noise.
    White(WhiteNoise),
}

impl KernelKind {
    /// Constructs a seeded kernel by name.
    ///
    /// The `params` object may carry kernel-specific settings; currently
    /// only `"interpolation"` (`"cubic"` or `"quintic"`) for the value
    /// kernel. Returns `NoiseError::UnknownKernel` for unrecognized names
    /// and `NoiseError::InvalidParams` for a bad interpolation name.
    pub fn from_name(name: &str, seed: u64, params: &Value) -> Result<Self, NoiseError> {
        match name {
            "gradient" => Ok(KernelKind::Gradient(GradientNoise::new(seed))),
            "simplex" => Ok(KernelKind::Simplex(SimplexNoise::new(seed))),
            "value" => {
                let policy = match param_string(params, "interpolation", "cubic").as_str() {
                    "cubic" => Interpolation::Cubic,
                    "quintic" => Interpolation::Quintic,
                    other => {
                        return Err(NoiseError::InvalidParams(format!(
                            "unknown interpolation '{other}' (expected 'cubic' or 'quintic')"
                        )))
                    }
                };
                Ok(KernelKind::Value(ValueNoise::with_interpolation(
                    seed, policy,
                )))
            }
            "white" => Ok(KernelKind::White(WhiteNoise::new(seed))),
            _ => Err(NoiseError::UnknownKernel(name.to_string())),
        }
    }

    /// Returns a slice of all recognized kernel names.
    pub fn list_kernels() -> &'static [&'static str] {
        KERNEL_NAMES
    }
}

impl NoiseKernel for KernelKind {
    fn name(&self) -> &'static str {
        match self {
            KernelKind::Gradient(k) => k.name(),
            KernelKind::Simplex(k) => k.name(),
            KernelKind::Value(k) => k.name(),
            KernelKind::White(k) => k.name(),
        }
    }

    fn sample2(&mut self, x: f64, y: f64) -> f64 {
        match self {
            KernelKind::Gradient(k) => k.sample2(x, y),
            KernelKind::Simplex(k) => k.sample2(x, y),
            KernelKind::Value(k) => k.sample2(x, y),
            KernelKind::White(k) => k.sample2(x, y),
        }
    }

    fn sample3(&mut self, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        match self {
            KernelKind::Gradient(k) => k.sample3(x, y, z),
            KernelKind::Simplex(k) => k.sample3(x, y, z),
            KernelKind::Value(k) => k.sample3(x, y, z),
            KernelKind::White(k) => k.sample3(x, y, z),
        }
    }

    fn supports_rank(&self, rank: Rank) -> bool {
        match self {
            KernelKind::Gradient(k) => k.supports_rank(rank),
            KernelKind::Simplex(k) => k.supports_rank(rank),
            KernelKind::Value(k) => k.supports_rank(rank),
            KernelKind::White(k) => k.supports_rank(rank),
        }
    }
}

/// Builds the kernel and field a recipe describes and runs the fractal
/// fill. The returned field carries raw kernel-range values.
pub fn generate(recipe: &Recipe) -> Result<Field, NoiseError> {
    recipe.validate()?;
    let rank = Rank::try_from(recipe.rank)?;
    let mut field = Field::new(rank, recipe.size)?;
    let mut kernel = KernelKind::from_name(&recipe.kernel, recipe.seed, &recipe.params)?;
    let params = FractalParams::from_json(&recipe.params);
    fill(&mut kernel, &mut field, &params)?;
    Ok(field)
}

/// [`generate`] followed by an in-place rescale onto `[lower, upper]`.
pub fn generate_normalized(
    recipe: &Recipe,
    lower: f64,
    upper: f64,
) -> Result<Field, NoiseError> {
    let mut field = generate(recipe)?;
    field.normalize(lower, upper)?;
    Ok(field)
}
