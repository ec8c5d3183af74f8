//! Deterministic random number generation.
//!
//! All shuffle and random-fill behavior in the engines flows through
//! [`GameRng`] so tests can inject a fixed seed and assert exact outcomes.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Derive independent streams, one per engine
//!
//! ```
//! use arcade_core::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork an independent stream for one engine
//! let mut board_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! let a: Vec<_> = (0..4).map(|_| rng.gen_range_usize(0..100)).collect();
//! let b: Vec<_> = (0..4).map(|_| board_rng.gen_range_usize(0..100)).collect();
//! assert_ne!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// Each engine that consumes randomness receives its own fork, so the order
/// in which engines draw never perturbs another engine's stream.
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

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random f32 in the given range.
    pub fn gen_range_f32(&mut self, range: std::ops::Range<f32>) -> f32 {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform Fisher–Yates permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
