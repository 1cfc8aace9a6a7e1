//! Deterministic layout RNG.
//!
//! Scene hosts that don't place tiles by hand can ask the registry to deal
//! a shuffled layout. The same seed always deals the same layout, so a
//! failed run can be replayed exactly.
//!
//! ```
//! use memory_tiles::core::LayoutRng;
//!
//! let mut a = LayoutRng::new(7);
//! let mut b = LayoutRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 stream used for dealing tile layouts.
#[derive(Clone, Debug)]
pub struct LayoutRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl LayoutRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut rng1 = LayoutRng::new(42);
        let mut rng2 = LayoutRng::new(42);

        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = LayoutRng::new(1);
        let mut rng2 = LayoutRng::new(2);

        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = LayoutRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        rng.shuffle(&mut data);

        assert_eq!(rng.seed(), 42);
        data.sort_unstable();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }
}
