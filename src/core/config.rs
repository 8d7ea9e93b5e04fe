//! Game configuration.
//!
//! Scoring constants and the unflip delay are configuration, not rules:
//! different deployments of the same engine disagree on them, so the
//! engine never hardcodes a reward or penalty.

use serde::{Deserialize, Serialize};

/// Scoring and timing constants for a game.
///
/// The default is the flat variant: +10 per found pair, no mismatch
/// penalty. [`GameConfig::penalizing`] gives the +2/-1 variant. Any
/// other combination can be built with the setters.
///
/// ```
/// use memory_pairs::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_match_reward(5)
///     .with_mismatch_penalty(2)
///     .with_unflip_delay_ms(750);
///
/// assert_eq!(config.match_reward, 5);
/// assert_eq!(config.mismatch_penalty, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score increase per found pair.
    pub match_reward: i64,

    /// Score decrease per mismatch. The engine floors the score at zero,
    /// so a penalty can never drive it negative.
    pub mismatch_penalty: i64,

    /// How long mismatched tiles stay visible before the caller is
    /// expected to invoke `unflip`, in milliseconds. The engine never
    /// sleeps - this value is carried on the `PendingUnflip` intent for
    /// the caller's timer.
    pub unflip_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_reward: 10,
            mismatch_penalty: 0,
            unflip_delay_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default flat scoring (+10, no penalty).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The penalizing variant: +2 per match, -1 per mismatch.
    #[must_use]
    pub fn penalizing() -> Self {
        Self {
            match_reward: 2,
            mismatch_penalty: 1,
            unflip_delay_ms: 1000,
        }
    }

    /// Set the match reward.
    #[must_use]
    pub fn with_match_reward(mut self, reward: i64) -> Self {
        assert!(reward >= 0, "Match reward must be non-negative");
        self.match_reward = reward;
        self
    }

    /// Set the mismatch penalty.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, penalty: i64) -> Self {
        assert!(penalty >= 0, "Mismatch penalty must be non-negative");
        self.mismatch_penalty = penalty;
        self
    }

    /// Set the unflip delay in milliseconds.
    #[must_use]
    pub fn with_unflip_delay_ms(mut self, delay_ms: u64) -> Self {
        self.unflip_delay_ms = delay_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_flat_scoring() {
        let config = GameConfig::default();
        assert_eq!(config.match_reward, 10);
        assert_eq!(config.mismatch_penalty, 0);
        assert_eq!(config.unflip_delay_ms, 1000);
    }

    #[test]
    fn test_penalizing_variant() {
        let config = GameConfig::penalizing();
        assert_eq!(config.match_reward, 2);
        assert_eq!(config.mismatch_penalty, 1);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_match_reward(5)
            .with_mismatch_penalty(3)
            .with_unflip_delay_ms(250);

        assert_eq!(config.match_reward, 5);
        assert_eq!(config.mismatch_penalty, 3);
        assert_eq!(config.unflip_delay_ms, 250);
    }

    #[test]
    #[should_panic(expected = "Match reward must be non-negative")]
    fn test_negative_reward_rejected() {
        let _ = GameConfig::new().with_match_reward(-1);
    }

    #[test]
    #[should_panic(expected = "Mismatch penalty must be non-negative")]
    fn test_negative_penalty_rejected() {
        let _ = GameConfig::new().with_mismatch_penalty(-1);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::penalizing();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
