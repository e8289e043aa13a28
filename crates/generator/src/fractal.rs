//! Fractal octave compositor: layers one kernel across multiple
//! frequencies to fill a [`Field`].
//!
//! For every lattice coordinate the compositor sums `octaves` kernel
//! evaluations, multiplying the sampling frequency by `lacunarity` and
//! the amplitude by `persistence` between octaves, then divides by the
//! total accumulated amplitude so the result stays within the kernel's
//! native range regardless of octave count.

use noisefield_core::error::NoiseError;
use noisefield_core::field::{Field, Rank};
use noisefield_core::kernel::NoiseKernel;
use noisefield_core::params::{param_f64, param_u32};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default frequency divisor for the first octave.
pub const DEFAULT_SCALE: f64 = 16.0;
/// Default octave count.
pub const DEFAULT_OCTAVES: u32 = 3;
/// Default per-octave frequency multiplier.
pub const DEFAULT_LACUNARITY: f64 = 2.0;
/// Default per-octave amplitude multiplier.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;

/// Octave-layering parameters for one fractal fill.
///
/// Immutable per synthesis run. `scale` is a frequency divisor: the first
/// octave samples at `coord / scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    pub scale: f64,
    pub octaves: u32,
    pub lacunarity: f64,
    pub persistence: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            octaves: DEFAULT_OCTAVES,
            lacunarity: DEFAULT_LACUNARITY,
            persistence: DEFAULT_PERSISTENCE,
        }
    }
}

impl FractalParams {
    /// Extracts parameters from a JSON object, falling back to defaults
    /// for missing keys.
    pub fn from_json(params: &Value) -> Self {
        Self {
            scale: param_f64(params, "scale", DEFAULT_SCALE),
            octaves: param_u32(params, "octaves", DEFAULT_OCTAVES),
            lacunarity: param_f64(params, "lacunarity", DEFAULT_LACUNARITY),
            persistence: param_f64(params, "persistence", DEFAULT_PERSISTENCE),
        }
    }

    /// Rejects parameter combinations the compositor cannot honor.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(NoiseError::InvalidParams(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        if self.octaves < 1 {
            return Err(NoiseError::InvalidParams(
                "octaves must be at least 1".into(),
            ));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(NoiseError::InvalidParams(format!(
                "lacunarity must be a positive finite number, got {}",
                self.lacunarity
            )));
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0) {
            return Err(NoiseError::InvalidParams(format!(
                "persistence must be a positive finite number, got {}",
                self.persistence
            )));
        }
        Ok(())
    }

    /// Sum of all octave amplitudes, the normalization divisor.
    fn total_amplitude(&self) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        for _ in 0..self.octaves {
            total += amplitude;
            amplitude *= self.persistence;
        }
        total
    }
}

/// Fills every coordinate of `field` with an amplitude-normalized fractal
/// sum of `kernel` evaluations.
///
/// Traversal order is fixed (x outermost, the last axis innermost,
/// matching the field's flat layout) because white noise draws its
/// generator once per sample. Rank support is checked before the first
/// write, so a field is never left partially filled behind an error.
pub fn fill(
    kernel: &mut dyn NoiseKernel,
    field: &mut Field,
    params: &FractalParams,
) -> Result<(), NoiseError> {
    params.validate()?;
    if !kernel.supports_rank(field.rank()) {
        return Err(NoiseError::UnsupportedRank {
            kernel: kernel.name(),
            rank: field.rank().axes(),
        });
    }

    let size = field.size();
    let total = params.total_amplitude();

    match field.rank() {
        Rank::One => {
            for x in 0..size {
                let value = octave_sum2(kernel, x as f64, 0.0, params);
                field.set(x, 0, 0, value / total);
            }
        }
        Rank::Two => {
            for x in 0..size {
                for y in 0..size {
                    let value = octave_sum2(kernel, x as f64, y as f64, params);
                    field.set(x, y, 0, value / total);
                }
            }
        }
        Rank::Three => {
            for x in 0..size {
                for y in 0..size {
                    for z in 0..size {
                        let value =
                            octave_sum3(kernel, x as f64, y as f64, z as f64, params)?;
                        field.set(x, y, z, value / total);
                    }
                }
            }
        }
    }
    Ok(())
}

fn octave_sum2(kernel: &mut dyn NoiseKernel, x: f64, y: f64, params: &FractalParams) -> f64 {
    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0 / params.scale;
    for _ in 0..params.octaves {
        value += kernel.sample2(x * frequency, y * frequency) * amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }
    value
}

fn octave_sum3(
    kernel: &mut dyn NoiseKernel,
    x: f64,
    y: f64,
    z: f64,
    params: &FractalParams,
) -> Result<f64, NoiseError> {
    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0 / params.scale;
    for _ in 0..params.octaves {
        value += kernel.sample3(x * frequency, y * frequency, z * frequency)? * amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }
    Ok(value)
}
