//! CLI error type and exit-code mapping.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: noise error (unknown kernel, bad rank or size, unsupported rank)
//! - 11: I/O error (PNG write)
//! - 12: input error (bad --params JSON, bad --lower/--upper, bad fractal values)
//! - 13: serialization error (JSON output failure)
//!
//! Core errors that trace back to a command-line flag are reported as
//! input errors, not noise errors: `InvalidBounds` comes straight from
//! `--lower`/`--upper` and `InvalidParams` from `--params`.

use noisefield_core::NoiseError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A core noise error the user cannot fix from the command line alone
    /// (unknown kernel, invalid rank or size, unsupported rank).
    Noise(NoiseError),
    /// An I/O error while writing the heightmap.
    Io(String),
    /// A flag-level input error (bad JSON params, inverted bounds).
    Input(String),
    /// A serialization error while emitting JSON output.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Noise(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Noise(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<NoiseError> for CliError {
    fn from(e: NoiseError) -> Self {
        match e {
            NoiseError::Io(msg) => CliError::Io(msg),
            NoiseError::InvalidBounds { .. } | NoiseError::InvalidParams(_) => {
                CliError::Input(e.to_string())
            }
            other => CliError::Noise(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
