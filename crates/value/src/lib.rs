#![deny(unsafe_code)]
//! Value noise kernel with selectable interpolation policy.
//!
//! Each integer lattice point hashes through a seeded
//! [`PermutationTable`] to a scalar in [0, 1]; samples between lattice
//! points interpolate their neighborhood. Two named policies exist
//! instead of the silent behavioral drift between historical writer
//! generations:
//!
//! - [`Interpolation::Quintic`] blends the cell's own corners (4 in 2-D,
//!   8 in 3-D) with quintic-faded linear interpolation. Cheap, but grid
//!   faceting is visible under shading.
//! - [`Interpolation::Cubic`] (the default) runs a Catmull-Rom cubic
//!   convolution over the surrounding 4x4 (2-D) or 4x4x4 (3-D) lattice
//!   values, evaluated axis by axis: z, then y, then x. 16/64 lookups per
//!   sample instead of 4/8, with second-derivative continuity; output may
//!   overshoot [0, 1] slightly, as cubic convolution does.

use noisefield_core::error::NoiseError;
use noisefield_core::kernel::NoiseKernel;
use noisefield_core::permutation::PermutationTable;

/// Interpolation policy for [`ValueNoise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Quintic-faded bilinear (2-D) / trilinear (3-D) corner blend.
    Quintic,
    /// Catmull-Rom cubic convolution over a 4-wide neighborhood per axis.
    #[default]
    Cubic,
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Catmull-Rom cubic through `p1` (t = 0) and `p2` (t = 1) with `p0`/`p3`
/// shaping the tangents.
#[inline]
fn cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    p1 + 0.5
        * t
        * (p2 - p0
            + t * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3
                + t * (3.0 * (p1 - p2) + p3 - p0)))
}

/// Value noise kernel. Owns its seeded permutation table; the policy is
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct ValueNoise {
    table: PermutationTable,
    interpolation: Interpolation,
}

impl ValueNoise {
    /// Builds the kernel with the default [`Interpolation::Cubic`] policy.
    pub fn new(seed: u64) -> Self {
        Self::with_interpolation(seed, Interpolation::default())
    }

    /// Builds the kernel with an explicit interpolation policy.
    pub fn with_interpolation(seed: u64, interpolation: Interpolation) -> Self {
        Self {
            table: PermutationTable::new(seed),
            interpolation,
        }
    }

    /// The policy this kernel was built with.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Hashed lattice value in [0, 1].
    #[inline]
    fn lattice2(&self, x: isize, y: isize) -> f64 {
        self.table.hash2(x, y) as f64 / 255.0
    }

    #[inline]
    fn lattice3(&self, x: isize, y: isize, z: isize) -> f64 {
        self.table.hash3(x, y, z) as f64 / 255.0
    }

    fn quintic2(&self, x: f64, y: f64) -> f64 {
        let xi = x.floor() as isize;
        let yi = y.floor() as isize;
        let u = fade(x - x.floor());
        let v = fade(y - y.floor());

        let x1 = lerp(self.lattice2(xi, yi), self.lattice2(xi + 1, yi), u);
        let x2 = lerp(self.lattice2(xi, yi + 1), self.lattice2(xi + 1, yi + 1), u);
        lerp(x1, x2, v)
    }

    fn quintic3(&self, x: f64, y: f64, z: f64) -> f64 {
        let xi = x.floor() as isize;
        let yi = y.floor() as isize;
        let zi = z.floor() as isize;
        let u = fade(x - x.floor());
        let v = fade(y - y.floor());
        let w = fade(z - z.floor());

        let x1 = lerp(self.lattice3(xi, yi, zi), self.lattice3(xi + 1, yi, zi), u);
        let x2 = lerp(
            self.lattice3(xi, yi + 1, zi),
            self.lattice3(xi + 1, yi + 1, zi),
            u,
        );
        let y1 = lerp(x1, x2, v);

        let x3 = lerp(
            self.lattice3(xi, yi, zi + 1),
            self.lattice3(xi + 1, yi, zi + 1),
            u,
        );
        let x4 = lerp(
            self.lattice3(xi, yi + 1, zi + 1),
            self.lattice3(xi + 1, yi + 1, zi + 1),
            u,
        );
        let y2 = lerp(x3, x4, v);

        lerp(y1, y2, w)
    }

    fn cubic2(&self, x: f64, y: f64) -> f64 {
        let xi = x.floor() as isize;
        let yi = y.floor() as isize;
        let tx = x - x.floor();
        let ty = y - y.floor();

        let mut columns = [0.0; 4];
        for (ci, column) in columns.iter_mut().enumerate() {
            let cx = xi + ci as isize - 1;
            let rows = [
                self.lattice2(cx, yi - 1),
                self.lattice2(cx, yi),
                self.lattice2(cx, yi + 1),
                self.lattice2(cx, yi + 2),
            ];
            *column = cubic(rows[0], rows[1], rows[2], rows[3], ty);
        }
        cubic(columns[0], columns[1], columns[2], columns[3], tx)
    }

    fn cubic3(&self, x: f64, y: f64, z: f64) -> f64 {
        let xi = x.floor() as isize;
        let yi = y.floor() as isize;
        let zi = z.floor() as isize;
        let tx = x - x.floor();
        let ty = y - y.floor();
        let tz = z - z.floor();

        let mut planes = [0.0; 4];
        for (pi, plane) in planes.iter_mut().enumerate() {
            let cx = xi + pi as isize - 1;
            let mut rows = [0.0; 4];
            for (ri, row) in rows.iter_mut().enumerate() {
                let cy = yi + ri as isize - 1;
                let depth = [
                    self.lattice3(cx, cy, zi - 1),
                    self.lattice3(cx, cy, zi),
                    self.lattice3(cx, cy, zi + 1),
                    self.lattice3(cx, cy, zi + 2),
                ];
                *row = cubic(depth[0], depth[1], depth[2], depth[3], tz);
            }
            *plane = cubic(rows[0], rows[1], rows[2], rows[3], ty);
        }
        cubic(planes[0], planes[1], planes[2], planes[3], tx)
    }
}

impl NoiseKernel for ValueNoise {
    fn name(&self) -> &'static str {
        "value"
    }

    fn sample2(&mut self, x: f64, y: f64) -> f64 {
        match self.interpolation {
            Interpolation::Quintic => self.quintic2(x, y),
            Interpolation::Cubic => self.cubic2(x, y),
        }
    }

    fn sample3(&mut self, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        Ok(match self.interpolation {
            Interpolation::Quintic => self.quintic3(x, y, z),
            Interpolation::Cubic => self.cubic3(x, y, z),
        })
    }
}
