//! Dense 1-, 2-, or 3-dimensional scalar field with equal extent per axis.
//!
//! A `Field` owns a single flat `Vec<f64>` plus an explicit [`Rank`] tag
//! and extent; coordinate access maps through an explicit offset
//! computation instead of nested arrays. Values are filled by one fractal
//! pass and may then be rescaled or combined in place any number of times.

use crate::error::NoiseError;
use std::fmt;

/// Smallest supported axis extent. Fields below this are rejected as
/// ill-formed for this system's intended use.
pub const MIN_SIZE: usize = 32;

/// Dimensionality of a [`Field`]: 1, 2, or 3 axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    One,
    Two,
    Three,
}

impl Rank {
    /// Number of axes as an integer.
    pub fn axes(self) -> u8 {
        match self {
            Rank::One => 1,
            Rank::Two => 2,
            Rank::Three => 3,
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = NoiseError;

    fn try_from(value: u8) -> Result<Self, NoiseError> {
        match value {
            1 => Ok(Rank::One),
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            other => Err(NoiseError::InvalidRank(other)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.axes())
    }
}

/// A dense scalar field indexed by up to three integer coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    rank: Rank,
    size: usize,
    data: Vec<f64>,
}

impl Field {
    /// Creates a zero-filled field of the given rank, with every axis at
    /// extent `size`.
    ///
    /// Returns `NoiseError::InvalidSize` if `size < MIN_SIZE`, or if the
    /// total element count would overflow `usize`.
    pub fn new(rank: Rank, size: usize) -> Result<Self, NoiseError> {
        if size < MIN_SIZE {
            return Err(NoiseError::InvalidSize {
                size,
                min: MIN_SIZE,
            });
        }
        let len = (0..rank.axes())
            .try_fold(1usize, |acc, _| acc.checked_mul(size))
            .ok_or(NoiseError::InvalidSize {
                size,
                min: MIN_SIZE,
            })?;
        Ok(Self {
            rank,
            size,
            data: vec![0.0; len],
        })
    }

    /// The field's rank tag.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Extent of every axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of stored values (`size` raised to the rank).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the field holds no values. Unreachable for constructed
    /// fields (`MIN_SIZE > 0`) but kept for the conventional pairing.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only access to the flat value store. Layout: the last axis of
    /// the rank varies fastest (`z` for rank 3, `y` for rank 2).
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the flat value store.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Maps coordinates to a flat offset. Axes beyond the rank must be 0.
    #[inline]
    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.size);
        match self.rank {
            Rank::One => {
                debug_assert!(y == 0 && z == 0);
                x
            }
            Rank::Two => {
                debug_assert!(y < self.size && z == 0);
                x * self.size + y
            }
            Rank::Three => {
                debug_assert!(y < self.size && z < self.size);
                (x * self.size + y) * self.size + z
            }
        }
    }

    /// Value at `(x, y, z)`; pass 0 for axes beyond the field's rank.
    pub fn get(&self, x: usize, y: usize, z: usize) -> f64 {
        self.data[self.offset(x, y, z)]
    }

    /// Writes `value` at `(x, y, z)`; pass 0 for axes beyond the rank.
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: f64) {
        let idx = self.offset(x, y, z);
        self.data[idx] = value;
    }

    /// Minimum and maximum over all stored values, or `None` for an empty
    /// store. An associative fold over the flat buffer, independent of rank.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Affinely rescales all values so the smallest maps to `lower` and
    /// the largest to `upper`.
    ///
    /// A constant field (min == max) is set to `lower` everywhere. Calling
    /// twice with the same bounds is a no-op up to floating-point rounding,
    /// since after the first call min == lower and max == upper exactly.
    ///
    /// Returns `NoiseError::InvalidBounds` if `lower > upper`.
    pub fn normalize(&mut self, lower: f64, upper: f64) -> Result<(), NoiseError> {
        if lower > upper {
            return Err(NoiseError::InvalidBounds { lower, upper });
        }
        let Some((min, max)) = self.min_max() else {
            return Ok(());
        };
        if min == max {
            self.data.fill(lower);
            return Ok(());
        }
        // Per-value division keeps the extremes exact: at v == max the
        // ratio is (max-min)/(max-min) == 1.0, so max maps onto upper
        // with no rounding slack. A hoisted reciprocal does not.
        for v in &mut self.data {
            *v = lower + (*v - min) / (max - min) * (upper - lower);
        }
        Ok(())
    }

    /// Element-wise accumulation: `self[c] += other[c] * weight`.
    ///
    /// `weight` may be negative (subtraction) or above 1 (amplification).
    /// No normalization is applied afterwards; callers needing bounded
    /// output call [`normalize`](Self::normalize) explicitly.
    ///
    /// Returns `NoiseError::ShapeMismatch` unless `other` has the same
    /// rank and extent.
    pub fn combine(&mut self, other: &Field, weight: f64) -> Result<(), NoiseError> {
        if self.rank != other.rank || self.size != other.size {
            return Err(NoiseError::ShapeMismatch {
                lhs_rank: self.rank.axes(),
                lhs_size: self.size,
                rhs_rank: other.rank.axes(),
                rhs_size: other.size,
            });
        }
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, b)| *a += b * weight);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_field(rank: Rank, size: usize) -> Field {
        let mut f = Field::new(rank, size).unwrap();
        for (i, v) in f.values_mut().iter_mut().enumerate() {
            *v = i as f64;
        }
        f
    }

    // -- Construction --

    #[test]
    fn new_creates_zero_filled_cube_per_rank() {
        for (rank, expected) in [
            (Rank::One, 32),
            (Rank::Two, 32 * 32),
            (Rank::Three, 32 * 32 * 32),
        ] {
            let f = Field::new(rank, 32).unwrap();
            assert_eq!(f.len(), expected);
            assert!(f.values().iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn new_rejects_size_below_minimum() {
        let err = Field::new(Rank::Two, 31).unwrap_err();
        assert!(matches!(
            err,
            NoiseError::InvalidSize { size: 31, min: 32 }
        ));
    }

    #[test]
    fn new_rejects_overflowing_extent() {
        assert!(Field::new(Rank::Three, usize::MAX / 2).is_err());
    }

    #[test]
    fn rank_try_from_rejects_out_of_range() {
        assert!(Rank::try_from(0).is_err());
        assert!(Rank::try_from(4).is_err());
        assert_eq!(Rank::try_from(2).unwrap(), Rank::Two);
    }

    // -- Coordinate mapping --

    #[test]
    fn get_after_set_round_trips_per_rank() {
        let mut f1 = Field::new(Rank::One, 32).unwrap();
        f1.set(17, 0, 0, 0.5);
        assert_eq!(f1.get(17, 0, 0), 0.5);

        let mut f2 = Field::new(Rank::Two, 32).unwrap();
        f2.set(3, 29, 0, -2.5);
        assert_eq!(f2.get(3, 29, 0), -2.5);

        let mut f3 = Field::new(Rank::Three, 32).unwrap();
        f3.set(31, 0, 15, 7.0);
        assert_eq!(f3.get(31, 0, 15), 7.0);
    }

    #[test]
    fn last_axis_varies_fastest_in_flat_layout() {
        let mut f = Field::new(Rank::Two, 32).unwrap();
        f.set(0, 1, 0, 1.0);
        f.set(1, 0, 0, 2.0);
        assert_eq!(f.values()[1], 1.0);
        assert_eq!(f.values()[32], 2.0);
    }

    // -- min_max --

    #[test]
    fn min_max_finds_extremes() {
        let mut f = Field::new(Rank::One, 32).unwrap();
        f.set(5, 0, 0, -3.0);
        f.set(20, 0, 0, 11.0);
        assert_eq!(f.min_max(), Some((-3.0, 11.0)));
    }

    // -- normalize --

    #[test]
    fn normalize_rejects_inverted_bounds() {
        let mut f = Field::new(Rank::One, 32).unwrap();
        assert!(matches!(
            f.normalize(1.0, 0.0),
            Err(NoiseError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn normalize_maps_extremes_exactly_onto_bounds() {
        let mut f = ramp_field(Rank::Two, 32);
        f.normalize(0.0, 100.0).unwrap();
        let (min, max) = f.min_max().unwrap();
        assert_eq!(min, 0.0);
        assert_eq!(max, 100.0);
        assert!(f.values().iter().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn normalize_never_overshoots_upper_for_awkward_extremes() {
        // Extremes whose span has no short binary representation; the
        // scaled maximum must still land on upper, not one ulp past it.
        let mut f = Field::new(Rank::One, 32).unwrap();
        f.values_mut().fill(1.0);
        f.set(3, 0, 0, 0.720_047_541_303_032_1);
        f.set(27, 0, 0, 1.778_462_751_850_003);
        f.normalize(0.0, 100.0).unwrap();
        let (min, max) = f.min_max().unwrap();
        assert_eq!(min, 0.0);
        assert_eq!(max, 100.0);
        assert!(f.values().iter().all(|&v| v <= 100.0));
    }

    #[test]
    fn normalize_constant_field_fills_with_lower() {
        let mut f = Field::new(Rank::One, 32).unwrap();
        f.values_mut().fill(5.0);
        f.normalize(-2.0, 3.0).unwrap();
        assert!(f.values().iter().all(|&v| v == -2.0));
    }

    #[test]
    fn normalize_twice_with_same_bounds_is_idempotent() {
        let mut f = ramp_field(Rank::One, 64);
        f.normalize(10.0, 20.0).unwrap();
        let first = f.clone();
        f.normalize(10.0, 20.0).unwrap();
        for (a, b) in first.values().iter().zip(f.values()) {
            assert!((a - b).abs() < 1e-12, "second normalize moved {a} to {b}");
        }
    }

    #[test]
    fn normalize_supports_negative_ranges() {
        let mut f = ramp_field(Rank::One, 32);
        f.normalize(-50.0, -10.0).unwrap();
        let (min, max) = f.min_max().unwrap();
        assert_eq!((min, max), (-50.0, -10.0));
    }

    // -- combine --

    #[test]
    fn combine_accumulates_weighted_values() {
        let mut a = Field::new(Rank::One, 32).unwrap();
        a.values_mut().fill(1.0);
        let mut b = Field::new(Rank::One, 32).unwrap();
        b.values_mut().fill(0.5);
        a.combine(&b, 2.0).unwrap();
        assert!(a.values().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn combine_with_opposite_weights_restores_original() {
        let mut a = ramp_field(Rank::Two, 32);
        let original = a.clone();
        let b = ramp_field(Rank::Two, 32);
        a.combine(&b, 0.75).unwrap();
        a.combine(&b, -0.75).unwrap();
        for (x, y) in original.values().iter().zip(a.values()) {
            assert!((x - y).abs() < 1e-9, "combine round trip drifted: {x} vs {y}");
        }
    }

    #[test]
    fn combine_rejects_size_mismatch() {
        let mut a = Field::new(Rank::Two, 32).unwrap();
        let b = Field::new(Rank::Two, 64).unwrap();
        assert!(matches!(
            a.combine(&b, 1.0),
            Err(NoiseError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn combine_rejects_rank_mismatch() {
        let mut a = Field::new(Rank::One, 32).unwrap();
        let b = Field::new(Rank::Two, 32).unwrap();
        assert!(matches!(
            a.combine(&b, 1.0),
            Err(NoiseError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn combine_leaves_values_unbounded() {
        let mut a = Field::new(Rank::One, 32).unwrap();
        a.values_mut().fill(1.0);
        let b = a.clone();
        a.combine(&b, 10.0).unwrap();
        assert!(a.values().iter().all(|&v| v == 11.0));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn values(len: usize) -> impl Strategy<Value = Vec<f64>> {
            prop::collection::vec(-1e6_f64..1e6, len)
        }

        proptest! {
            #[test]
            fn normalize_range_law(
                data in values(64),
                lower in -100.0_f64..100.0,
                width in 0.0_f64..200.0,
            ) {
                let upper = lower + width;
                let mut f = Field::new(Rank::One, 64).unwrap();
                f.values_mut().copy_from_slice(&data);
                f.normalize(lower, upper).unwrap();
                for &v in f.values() {
                    prop_assert!(
                        v >= lower - 1e-9 && v <= upper + 1e-9,
                        "value {v} escaped [{lower}, {upper}]"
                    );
                }
            }

            #[test]
            fn combine_then_inverse_is_identity(
                data_a in values(32),
                data_b in values(32),
                weight in -5.0_f64..5.0,
            ) {
                let mut a = Field::new(Rank::One, 32).unwrap();
                a.values_mut().copy_from_slice(&data_a);
                let snapshot = a.clone();
                let mut b = Field::new(Rank::One, 32).unwrap();
                b.values_mut().copy_from_slice(&data_b);

                a.combine(&b, weight).unwrap();
                a.combine(&b, -weight).unwrap();
                for (x, y) in snapshot.values().iter().zip(a.values()) {
                    prop_assert!((x - y).abs() < 1e-6);
                }
            }
        }
    }
}
