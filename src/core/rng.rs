//! Deterministic random number generation for board deals.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Uniform**: Shuffles via Fisher-Yates, every permutation equally likely
//! - **Forkable**: Each new game deals from an independent branch
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use memory_pairs::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5, 6];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same deal
//! let mut rng2 = GameRng::new(42);
//! let mut deck2 = vec![1, 2, 3, 4, 5, 6];
//! rng2.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG with forking for successive deals.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Each `fork` produces an independent but deterministic
/// stream, so restarting a game deals a fresh board without disturbing
/// the parent sequence.
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
    /// Used to give every new game its own deal stream.
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

    /// Shuffle a slice in place with a uniform Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for snapshotting a game.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..20 {
            let mut a: Vec<u32> = (0..16).collect();
            let mut b: Vec<u32> = (0..16).collect();
            rng1.shuffle(&mut a);
            rng2.shuffle(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut a: Vec<u32> = (0..32).collect();
        let mut b: Vec<u32> = (0..32).collect();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

        rng.shuffle(&mut data);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let mut a: Vec<u32> = (0..32).collect();
        let mut b: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut a);
        forked.shuffle(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        // Advance the stream
        let mut scratch: Vec<u32> = (0..64).collect();
        rng.shuffle(&mut scratch);

        let state = rng.state();

        let mut expected: Vec<u32> = (0..16).collect();
        rng.shuffle(&mut expected);

        let mut restored = GameRng::from_state(&state);
        let mut actual: Vec<u32> = (0..16).collect();
        restored.shuffle(&mut actual);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_state_preserves_fork_counter() {
        let mut rng = GameRng::new(42);

        let _ = rng.fork();
        let _ = rng.fork();

        let state = rng.state();
        assert_eq!(state.fork_counter, 2);

        let restored = GameRng::from_state(&state);
        assert_eq!(restored.fork_counter, 2);
    }
}
