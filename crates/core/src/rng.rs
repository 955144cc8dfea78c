//! RNG module - letter generation
//!
//! Letters are drawn uniformly from the lowercase alphabet. The random source
//! is always injected, so a seeded source makes the whole sequence
//! reproducible (tests, replays, benchmarks).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::ALPHABET;

/// Produces the next letter to spawn.
#[derive(Debug, Clone)]
pub struct LetterSource<R = Pcg32> {
    rng: R,
}

impl<R: Rng> LetterSource<R> {
    /// Wrap an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the next letter (uniform over `a..=z`).
    pub fn next_letter(&mut self) -> char {
        ALPHABET[self.rng.random_range(0..ALPHABET.len())]
    }
}

impl LetterSource<Pcg32> {
    /// A PCG-backed source seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}
