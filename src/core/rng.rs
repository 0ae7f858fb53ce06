//! Deterministic random number generation for card draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical cards
//! - **Context streams**: Independent sequences for names and provider draws
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use cat_cards::core::CardRng;
//!
//! let rng = CardRng::new(42);
//!
//! // Names and stats come from separate streams
//! let mut names = rng.for_context("names");
//! let mut stats = rng.for_context("stats");
//!
//! let pool = ["Luna", "Tom"];
//! assert!(names.choose(&pool).is_some());
//! assert!((1..=10).contains(&stats.gen_range_u32(1..=10)));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Seedable RNG used for every random draw in the crate.
///
/// Uses ChaCha8 so a seed gives the same sequence regardless of `rand`'s
/// default generator. Context seeds are mixed with `FxHasher`, which does
/// not change between Rust releases.
#[derive(Clone, Debug)]
pub struct CardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Generate a random u32 in the given inclusive range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_u32(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice, uniformly and with replacement.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Choose an index with weighted probability.
    ///
    /// Weights do not need to sum to anything in particular.
    /// Returns `None` if weights are empty or all zero.
    pub fn choose_weighted(&mut self, weights: &[u32]) -> Option<usize> {
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
        if total == 0 {
            return None;
        }

        let mut threshold = self.inner.gen_range(0..total);
        for (i, &weight) in weights.iter().enumerate() {
            let weight = u64::from(weight);
            if threshold < weight {
                return Some(i);
            }
            threshold -= weight;
        }

        unreachable!("threshold is always below the weight total")
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> CardRngState {
        CardRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CardRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for resuming a seeded stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}
