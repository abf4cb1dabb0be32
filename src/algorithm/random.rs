//! Seeded random source shared by one generation run
//!
//! The source remembers its seed so any run, successful or failed, can be
//! replayed exactly. It is passed to the assembler by reference rather than
//! living in global state, so independent runs never interfere.

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

/// Deterministic random generator that remembers its seed
#[derive(Clone, Debug)]
pub struct RandomSource {
    seed: u64,
    rng: StdRng,
}

impl RandomSource {
    /// Seed explicitly
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed from system entropy
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    /// Use `seed` when given, otherwise draw one from system entropy
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Seed this source was created with
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`, or `None` when `len` is zero
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst);
    }
}
