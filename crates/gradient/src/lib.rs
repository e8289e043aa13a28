#![deny(unsafe_code)]
//! Perlin-style gradient noise kernel.
//!
//! Classic improved Perlin noise: each sample floors to a lattice cell,
//! hashes the cell's corners through a seeded [`PermutationTable`] to pick
//! gradients from the fixed 12-direction set (the `hash & 15` mapping,
//! with four duplicated directions), dots each gradient with the offset
//! from its corner, and blends the corner contributions with quintic-faded
//! linear interpolation. Output is approximately in [-1, 1]; the 3-D
//! variant is not rigorously bounded. Exactly 0 at integer lattice points.

use noisefield_core::error::NoiseError;
use noisefield_core::kernel::NoiseKernel;
use noisefield_core::permutation::PermutationTable;

/// Quintic fade `6t^5 - 15t^4 + 10t^3`, zero first and second derivative
/// at t = 0 and t = 1.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the offset `(x, y)` with the gradient selected by
/// `hash & 15`: u is x or y, v is y, x, or 0, with signs from bits 0 and 1.
#[inline]
fn grad2(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        0.0
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// 3-D extension of [`grad2`]: the third slot contributes z where the 2-D
/// mapping contributed nothing.
#[inline]
fn grad3(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Gradient (Perlin) noise kernel. Owns its seeded permutation table;
/// immutable after construction.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    table: PermutationTable,
}

impl GradientNoise {
    /// Builds the kernel, constructing its permutation table from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            table: PermutationTable::new(seed),
        }
    }
}

impl NoiseKernel for GradientNoise {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn sample2(&mut self, x: f64, y: f64) -> f64 {
        let xi = x.floor() as isize;
        let yi = y.floor() as isize;
        let xf = x - x.floor();
        let yf = y - y.floor();
        let u = fade(xf);
        let v = fade(yf);

        let aa = self.table.hash2(xi, yi);
        let ba = self.table.hash2(xi + 1, yi);
        let ab = self.table.hash2(xi, yi + 1);
        let bb = self.table.hash2(xi + 1, yi + 1);

        let x1 = lerp(grad2(aa, xf, yf), grad2(ba, xf - 1.0, yf), u);
        let x2 = lerp(grad2(ab, xf, yf - 1.0), grad2(bb, xf - 1.0, yf - 1.0), u);
        lerp(x1, x2, v)
    }

    fn sample3(&mut self, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        let xi = x.floor() as isize;
        let yi = y.floor() as isize;
        let zi = z.floor() as isize;
        let xf = x - x.floor();
        let yf = y - y.floor();
        let zf = z - z.floor();
        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        let t = &self.table;
        let aaa = t.hash3(xi, yi, zi);
        let baa = t.hash3(xi + 1, yi, zi);
        let aba = t.hash3(xi, yi + 1, zi);
        let bba = t.hash3(xi + 1, yi + 1, zi);
        let aab = t.hash3(xi, yi, zi + 1);
        let bab = t.hash3(xi + 1, yi, zi + 1);
        let abb = t.hash3(xi, yi + 1, zi + 1);
        let bbb = t.hash3(xi + 1, yi + 1, zi + 1);

        let x1 = lerp(grad3(aaa, xf, yf, zf), grad3(baa, xf - 1.0, yf, zf), u);
        let x2 = lerp(
            grad3(aba, xf, yf - 1.0, zf),
            grad3(bba, xf - 1.0, yf - 1.0, zf),
            u,
        );
        let y1 = lerp(x1, x2, v);

        let x3 = lerp(
            grad3(aab, xf, yf, zf - 1.0),
            grad3(bab, xf - 1.0, yf, zf - 1.0),
            u,
        );
        let x4 = lerp(
            grad3(abb, xf, yf - 1.0, zf - 1.0),
            grad3(bbb, xf - 1.0, yf - 1.0, zf - 1.0),
            u,
        );
        let y2 = lerp(x3, x4, v);

        Ok(lerp(y1, y2, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noisefield_core::field::Rank;

    #[test]
    fn fade_is_fixed_at_endpoints_and_midpoint() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn same_seed_samples_identically() {
        let mut a = GradientNoise::new(42);
        let mut b = GradientNoise::new(42);
        for i in 0..200 {
            let x = i as f64 * 0.173 - 17.0;
            let y = i as f64 * 0.311 + 3.0;
            assert_eq!(a.sample2(x, y), b.sample2(x, y));
            assert_eq!(
                a.sample3(x, y, 0.5 * x).unwrap(),
                b.sample3(x, y, 0.5 * x).unwrap()
            );
        }
    }

    #[test]
    fn different_seeds_sample_differently_somewhere() {
        let mut a = GradientNoise::new(42);
        let mut b = GradientNoise::new(43);
        let diverged = (0..100).any(|i| {
            let x = i as f64 * 0.37;
            a.sample2(x, x * 0.7) != b.sample2(x, x * 0.7)
        });
        assert!(diverged);
    }

    #[test]
    fn zero_at_integer_lattice_points() {
        // Every gradient dots with a zero offset vector at its own corner.
        let mut kernel = GradientNoise::new(7);
        for x in -5..5_i32 {
            for y in -5..5_i32 {
                assert_eq!(kernel.sample2(f64::from(x), f64::from(y)), 0.0);
                assert_eq!(
                    kernel
                        .sample3(f64::from(x), f64::from(y), f64::from(x + y))
                        .unwrap(),
                    0.0
                );
            }
        }
    }

    #[test]
    fn samples_stay_near_signed_unit_range() {
        let mut kernel = GradientNoise::new(1234);
        for i in 0..2000 {
            let x = i as f64 * 0.0913 - 40.0;
            let y = i as f64 * 0.0471 + 11.0;
            let v2 = kernel.sample2(x, y);
            assert!(v2.abs() <= 1.5, "sample2({x}, {y}) = {v2}");
            let v3 = kernel.sample3(x, y, x * 0.3).unwrap();
            assert!(v3.abs() <= 1.5, "sample3 out of range: {v3}");
        }
    }

    #[test]
    fn supports_every_rank() {
        let kernel = GradientNoise::new(0);
        for rank in [Rank::One, Rank::Two, Rank::Three] {
            assert!(kernel.supports_rank(rank));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sample2_is_finite_for_any_input(
                seed: u64,
                x in -1e4_f64..1e4,
                y in -1e4_f64..1e4,
            ) {
                let mut kernel = GradientNoise::new(seed);
                prop_assert!(kernel.sample2(x, y).is_finite());
            }

            #[test]
            fn sample3_is_finite_for_any_input(
                seed: u64,
                x in -1e4_f64..1e4,
                y in -1e4_f64..1e4,
                z in -1e4_f64..1e4,
            ) {
                let mut kernel = GradientNoise::new(seed);
                prop_assert!(kernel.sample3(x, y, z).unwrap().is_finite());
            }
        }
    }
}
