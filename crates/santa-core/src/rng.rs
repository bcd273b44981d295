//! Random source abstraction and the Fisher-Yates shuffle.
//!
//! The generator never touches a global RNG. It takes a `RandomSource`,
//! whose single capability is "uniform index below a bound", so tests can
//! script the exact value sequence and reproduce runs bit for bit.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Injectable source of uniform randomness.
pub trait RandomSource {
    /// Return a uniformly distributed index in `[0, bound)`.
    ///
    /// `bound` is always >= 1 when called from this crate.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Random source backed by the thread-local OS-seeded generator.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Deterministic random source for reproducible runs (`--seed`).
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source producing the same sequence for the same seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Unbiased in-place Fisher-Yates shuffle.
///
/// Every permutation of `items` is equally likely given a uniform source.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Replays a scripted value sequence; values are taken modulo the bound.
///
/// Test-only: lets a test pin the exact permutations the generator tries.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: Vec<usize>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ThreadRandom::new();
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_of_singleton_and_empty_is_noop() {
        let mut rng = ThreadRandom::new();
        let mut one = vec![7];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
        let mut none: Vec<u8> = vec![];
        shuffle(&mut none, &mut rng);
        assert!(none.is_empty());
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        let xs: Vec<usize> = (0..20).map(|_| a.next_index(100)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.next_index(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRandom::new(1);
        let mut b = SeededRandom::new(2);
        let xs: Vec<usize> = (0..32).map(|_| a.next_index(1_000_000)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.next_index(1_000_000)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn scripted_source_drives_shuffle_deterministically() {
        // With all-zero draws, Fisher-Yates rotates items left by one:
        // each position i in (1..n).rev() swaps with index 0.
        let mut rng = ScriptedRandom::new(vec![0]);
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, vec![2, 3, 4, 1]);
    }
}
