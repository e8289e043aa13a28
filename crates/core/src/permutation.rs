//! Seeded 512-entry permutation table for lattice hashing.
//!
//! All lattice kernels (gradient, simplex, value) hash integer lattice
//! coordinates through the same table shape: a permutation of 0..=255
//! stored twice back-to-back, so that `table[table[x] + y]` for x, y in
//! 0..=256 never needs a modulo or a bounds branch.

use crate::prng::Xorshift64;

/// Length of the first, authoritative half of the table.
pub const TABLE_HALF: usize = 256;

/// A 512-entry lattice hash table built once per kernel from a seed.
///
/// Immutable after construction. Identical seeds produce byte-identical
/// tables; the shuffle consumes exactly 255 [`Xorshift64`] draws in a
/// fixed order, so construction is inherently sequential.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    entries: [u8; TABLE_HALF * 2],
}

impl PermutationTable {
    /// Builds the table from `seed` via a reverse Fisher-Yates shuffle
    /// (i from 255 down to 1, swap with a uniform j in [0, i]), then
    /// duplicates the shuffled half into the upper 256 slots.
    pub fn new(seed: u64) -> Self {
        let mut rng = Xorshift64::new(seed);
        let mut half = [0u8; TABLE_HALF];
        for (i, slot) in half.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in (1..TABLE_HALF).rev() {
            let j = rng.next_usize(i + 1);
            half.swap(i, j);
        }

        let mut entries = [0u8; TABLE_HALF * 2];
        entries[..TABLE_HALF].copy_from_slice(&half);
        entries[TABLE_HALF..].copy_from_slice(&half);
        Self { entries }
    }

    /// Table lookup. `index` must be in 0..512; kernels guarantee this by
    /// masking lattice coordinates with `& 255` before chaining.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        self.entries[index] as usize
    }

    /// Chained two-coordinate hash: `table[table[x & 255] + (y & 255)]`.
    #[inline]
    pub fn hash2(&self, x: isize, y: isize) -> usize {
        let xi = (x & 255) as usize;
        let yi = (y & 255) as usize;
        self.get(self.get(xi) + yi)
    }

    /// Chained three-coordinate hash, extending [`hash2`](Self::hash2) by z.
    #[inline]
    pub fn hash3(&self, x: isize, y: isize, z: isize) -> usize {
        let zi = (z & 255) as usize;
        self.get(self.hash2(x, y) + zi)
    }
}
