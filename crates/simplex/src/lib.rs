#![deny(unsafe_code)]
//! 2-D simplex noise kernel.
//!
//! Skews the input square lattice onto a triangular (simplex) lattice,
//! accumulates a radial-falloff gradient contribution from the three
//! corners of the containing triangle, and rescales by 70 so output lands
//! approximately in [-1, 1]. Only the 2-D variant exists; rank-3 sampling
//! is rejected rather than silently projected.

use noisefield_core::error::NoiseError;
use noisefield_core::field::Rank;
use noisefield_core::kernel::NoiseKernel;
use noisefield_core::permutation::PermutationTable;

/// Skew factor `(sqrt(3) - 1) / 2` mapping squares onto the simplex grid.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_1;

/// Fixed 8-direction gradient set indexed by a hashed corner mod 8.
const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

#[inline]
fn fast_floor(v: f64) -> isize {
    if v > 0.0 {
        v as isize
    } else {
        v as isize - 1
    }
}

/// Radial-falloff contribution of one simplex corner: `t^4 * (g . d)` for
/// `t = 0.5 - dx^2 - dy^2`, or 0 once the sample leaves the corner's disc.
#[inline]
fn corner(t: f64, gradient: (f64, f64), dx: f64, dy: f64) -> f64 {
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * (gradient.0 * dx + gradient.1 * dy)
    }
}

/// 2-D simplex noise kernel. Owns its seeded permutation table.
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    table: PermutationTable,
}

impl SimplexNoise {
    /// Builds the kernel, constructing its permutation table from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            table: PermutationTable::new(seed),
        }
    }

    /// Hashes a skewed lattice corner into the 8-direction gradient set.
    #[inline]
    fn gradient_at(&self, i: isize, j: isize) -> (f64, f64) {
        let inner = self.table.get((j & 255) as usize) as isize;
        let index = self.table.get(((i + inner) & 255) as usize) % 8;
        GRADIENTS[index]
    }
}

impl NoiseKernel for SimplexNoise {
    fn name(&self) -> &'static str {
        "simplex"
    }

    fn sample2(&mut self, x: f64, y: f64) -> f64 {
        // Locate the skewed cell containing the sample.
        let s = (x + y) * F2;
        let i = fast_floor(x + s);
        let j = fast_floor(y + s);

        // Unskew back to input space and take the offset from the cell origin.
        let t = (i + j) as f64 * G2;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);

        // Which of the cell's two triangles we are in. The x0 > y0
        // tie-break decides the middle corner and must not change.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let g0 = self.gradient_at(i, j);
        let g1 = self.gradient_at(i + i1, j + j1);
        let g2 = self.gradient_at(i + 1, j + 1);

        let n0 = corner(0.5 - x0 * x0 - y0 * y0, g0, x0, y0);
        let n1 = corner(0.5 - x1 * x1 - y1 * y1, g1, x1, y1);
        let n2 = corner(0.5 - x2 * x2 - y2 * y2, g2, x2, y2);

        70.0 * (n0 + n1 + n2)
    }

    fn sample3(&mut self, _x: f64, _y: f64, _z: f64) -> Result<f64, NoiseError> {
        Err(NoiseError::UnsupportedRank {
            kernel: self.name(),
            rank: 3,
        })
    }

    fn supports_rank(&self, rank: Rank) -> bool {
        !matches!(rank, Rank::Three)
    }
}
