//! Grayscale PNG snapshots of a filled [`Field`].
//!
//! Feature-gated behind `png` (default on) so embedders can depend on the
//! generator without pulling in the `image` crate. A rank-2 field renders
//! as a square image and a rank-1 field as a one-pixel-high strip; rank-3
//! fields have no 2-D projection here and are rejected.

use noisefield_core::error::NoiseError;
use noisefield_core::field::{Field, Rank};
use std::path::Path;

/// Maps a field onto 8-bit grayscale pixels, returning
/// `(width, height, pixels)` in row-major order.
///
/// Values are rescaled so the field minimum maps to 0 and the maximum to
/// 255; a constant field renders black. Rank-3 input is rejected with
/// `NoiseError::UnsupportedRank`.
pub fn field_to_gray(field: &Field) -> Result<(u32, u32, Vec<u8>), NoiseError> {
    let (width, height) = match field.rank() {
        Rank::One => (field.size(), 1),
        Rank::Two => (field.size(), field.size()),
        Rank::Three => {
            return Err(NoiseError::UnsupportedRank {
                kernel: "heightmap",
                rank: 3,
            })
        }
    };

    let (min, max) = field.min_max().unwrap_or((0.0, 0.0));
    let span = max - min;
    let pixels = field
        .values()
        .iter()
        .map(|&v| {
            if span == 0.0 {
                0
            } else {
                ((v - min) / span * 255.0).round() as u8
            }
        })
        .collect();

    let w = u32::try_from(width).map_err(|_| NoiseError::InvalidSize {
        size: width,
        min: noisefield_core::MIN_SIZE,
    })?;
    let h = u32::try_from(height).map_err(|_| NoiseError::InvalidSize {
        size: height,
        min: noisefield_core::MIN_SIZE,
    })?;
    Ok((w, h, pixels))
}

/// Writes the field as a grayscale PNG.
///
/// Rank-2 fields render with the first axis as image rows. I/O and
/// encoding failures map to `NoiseError::Io`.
pub fn write_png(field: &Field, path: &Path) -> Result<(), NoiseError> {
    let (w, h, pixels) = field_to_gray(field)?;
    let img = image::GrayImage::from_raw(w, h, pixels)
        .ok_or_else(|| NoiseError::Io("gray buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NoiseError::Io(e.to_string()))
}
