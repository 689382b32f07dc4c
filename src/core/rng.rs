//! Deterministic random number generation for player strategies.
//!
//! Random players draw from a `GameRng` rather than a thread-local source so
//! that a whole match can be replayed from a single seed.
//!
//! ```
//! use rust_rps::core::GameRng;
//!
//! let mut rng = GameRng::new(7);
//!
//! // Each random player gets its own stream.
//! let mut player_b = rng.fork();
//!
//! let mut replay = GameRng::new(7);
//! let mut player_b_again = replay.fork();
//! assert_eq!(player_b.gen_range_usize(0..5), player_b_again.gen_range_usize(0..5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator with deterministic forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, so `seed()` can be logged and the
    /// match replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent, reproducible stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
