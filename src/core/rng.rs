//! Deterministic random number generation, one stream per game.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Derivable**: Per-game seeds are computed from a batch seed
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use chopsticks::core::{derive_seed, GameRng};
//!
//! let mut game_a = GameRng::new(derive_seed(42, 1));
//! let mut game_b = GameRng::new(derive_seed(42, 2));
//! assert_ne!(game_a.seed(), game_b.seed());
//!
//! // A checkpoint resumes the exact same stream.
//! let saved = game_a.state();
//! let next = game_a.coin_flip();
//! assert_eq!(GameRng::from_state(&saved).coin_flip(), next);
//! # let _ = game_b.coin_flip();
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded RNG owned by a single game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fair coin.
    pub fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Uniformly choose an element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Seed of the `n`-th stream derived from `seed`.
///
/// Lets a batch compute any game's seed directly, in any order.
#[must_use]
pub fn derive_seed(seed: u64, n: u64) -> u64 {
    seed.wrapping_add(n.wrapping_mul(FORK_STRIDE))
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
