// src/generators/random.rs
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

pub const BASE36_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of uniform choices for password mutation.
pub trait RandomSource {
    /// Uniform integer in `0..=upper`.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Uniform character from a non-empty alphabet.
    fn next_char(&mut self, alphabet: &[u8]) -> char {
        alphabet[self.next_index(alphabet.len() - 1)] as char
    }

    fn next_base36(&mut self) -> char {
        self.next_char(BASE36_CHARS)
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<ChaCha20Rng> {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }
}
