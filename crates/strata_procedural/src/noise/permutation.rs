//! Seeded permutation table shared by both noise kernels.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Seed;

/// Pre-computed permutation table for noise.
///
/// 256 unique values in `[0, 255]`, shuffled once from the seed and stored
/// twice so `perm[i + perm[j]]` never needs to wrap for `i, j <= 255`.
/// Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    /// 512-entry permutation table (256 entries, doubled for overflow handling).
    perm: [u8; 512],
}

impl PermutationTable {
    /// Number of distinct entries.
    pub const SIZE: usize = 256;

    /// Shuffles a fresh table with a `ChaCha8` stream seeded from `seed`.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
        Self::from_rng(&mut rng)
    }

    /// Shuffles a fresh table with a caller-owned RNG.
    #[must_use]
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // Identity permutation, then Fisher-Yates.
        #[allow(clippy::cast_possible_truncation)]
        let mut base: [u8; Self::SIZE] = std::array::from_fn(|i| i as u8);
        base.shuffle(rng);

        let mut perm = [0u8; 2 * Self::SIZE];
        perm[..Self::SIZE].copy_from_slice(&base);
        perm[Self::SIZE..].copy_from_slice(&base);
        Self { perm }
    }

    /// Gets a permutation value (with automatic wrapping).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> usize {
        usize::from(self.perm[index & 511])
    }

    /// The doubled table.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_permutation() {
        let table = PermutationTable::new(Seed::new(42));
        let mut seen = [false; 256];
        for &v in &table.as_slice()[..256] {
            assert!(!seen[usize::from(v)], "value {v} appears twice");
            seen[usize::from(v)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_table_is_doubled() {
        let table = PermutationTable::new(Seed::new(9));
        let perm = table.as_slice();
        assert_eq!(perm.len(), 512);
        assert_eq!(&perm[..256], &perm[256..]);
        assert_eq!(table.get(3), table.get(3 + 512));
    }

    #[test]
    fn test_table_determinism() {
        assert_eq!(PermutationTable::new(Seed::new(5)), PermutationTable::new(Seed::new(5)));
        assert_ne!(PermutationTable::new(Seed::new(5)), PermutationTable::new(Seed::new(6)));
    }

    #[test]
    fn test_seed_zero_is_shuffled() {
        let table = PermutationTable::new(Seed::new(0));
        let identity = (0..=255u8).collect::<Vec<_>>();
        assert_ne!(&table.as_slice()[..256], identity.as_slice());
    }
}
