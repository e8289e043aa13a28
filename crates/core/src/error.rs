//! Error types for the noisefield core.

use thiserror::Error;

/// Errors produced by field construction, field operations, and kernels.
///
/// Every variant is a precondition violation reported immediately to the
/// caller; none is retryable and none is silently coerced.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A field rank outside 1..=3 was requested.
    #[error("invalid rank {0}: a field must be 1-, 2-, or 3-dimensional")]
    InvalidRank(u8),

    /// A field extent below the supported minimum was requested.
    #[error("invalid size {size}: each axis must have extent >= {min}")]
    InvalidSize { size: usize, min: usize },

    /// `normalize` was called with `lower > upper`.
    #[error("invalid bounds: lower {lower} is greater than upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    /// Two fields had incompatible shape for an element-wise operation.
    #[error(
        "shape mismatch: rank {lhs_rank} size {lhs_size} vs rank {rhs_rank} size {rhs_size}"
    )]
    ShapeMismatch {
        lhs_rank: u8,
        lhs_size: usize,
        rhs_rank: u8,
        rhs_size: usize,
    },

    /// A kernel was asked to sample at a rank it does not implement.
    #[error("kernel '{kernel}' does not support rank-{rank} sampling")]
    UnsupportedRank { kernel: &'static str, rank: u8 },

    /// Fractal parameters failed validation (non-positive scale, zero octaves, ...).
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A kernel name was not recognized by the dispatcher.
    #[error("unknown kernel: {0}")]
    UnknownKernel(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
