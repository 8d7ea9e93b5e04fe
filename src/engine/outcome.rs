//! Turn outcomes and the deferred-unflip protocol.
//!
//! `select_tile` reports what it did instead of forcing the caller to diff
//! state. The interesting case is a mismatch: the engine never sleeps, so
//! it returns a [`PendingUnflip`] naming the two tiles, the configured
//! delay, and the current [`Generation`]. The caller schedules a timer and
//! invokes `Game::unflip` with that generation when it fires; if a new
//! game started in the meantime, the generation no longer matches and the
//! stale unflip is absorbed as a no-op.

use serde::{Deserialize, Serialize};

use crate::core::tile::TileId;

/// Counter distinguishing successive games within one engine instance.
///
/// Incremented on every `new_game`. Deferred operations carry the
/// generation they were issued under and are rejected once it goes stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation of the next game.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generation({})", self.0)
    }
}

/// Intent to flip two mismatched tiles back face-down after a delay.
///
/// The engine emits this from a mismatching `select_tile`; the caller is
/// responsible for waiting `delay_ms` and then calling
/// `Game::unflip(first, second, generation)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUnflip {
    /// The tile that opened the turn.
    pub first: TileId,

    /// The tile that resolved the turn.
    pub second: TileId,

    /// How long the mismatch stays visible, in milliseconds.
    pub delay_ms: u64,

    /// The game this intent belongs to. Pass it back to `unflip`
    /// unchanged so a stale timer cannot touch a newer game.
    pub generation: Generation,
}

/// Result of a `select_tile` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// First tile of a turn flipped face-up; awaiting the second.
    Opened(TileId),

    /// Second tile matched the first: both are now permanently matched.
    Matched { first: TileId, second: TileId },

    /// Second tile did not match: the caller owes a deferred `unflip`.
    Mismatched(PendingUnflip),

    /// The selection was invalid (unknown id, matched or face-up tile,
    /// finished game) and had no effect. Mirrors "ignore invalid taps".
    Ignored,
}

impl TurnOutcome {
    /// Did this selection change any state?
    #[must_use]
    pub fn is_effective(&self) -> bool {
        !matches!(self, TurnOutcome::Ignored)
    }

    /// Did this selection resolve a two-tile turn?
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(self, TurnOutcome::Matched { .. } | TurnOutcome::Mismatched(_))
    }

    /// The unflip intent, if this was a mismatch.
    #[must_use]
    pub fn pending_unflip(&self) -> Option<PendingUnflip> {
        match self {
            TurnOutcome::Mismatched(pending) => Some(*pending),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_next() {
        let g = Generation::default();
        assert_eq!(g.raw(), 0);
        assert_eq!(g.next(), Generation(1));
        assert_eq!(format!("{}", g.next()), "Generation(1)");
    }

    #[test]
    fn test_outcome_predicates() {
        let opened = TurnOutcome::Opened(TileId::new(0));
        assert!(opened.is_effective());
        assert!(!opened.is_resolution());
        assert_eq!(opened.pending_unflip(), None);

        let matched = TurnOutcome::Matched {
            first: TileId::new(0),
            second: TileId::new(1),
        };
        assert!(matched.is_resolution());

        let pending = PendingUnflip {
            first: TileId::new(0),
            second: TileId::new(1),
            delay_ms: 1000,
            generation: Generation(2),
        };
        let mismatched = TurnOutcome::Mismatched(pending);
        assert!(mismatched.is_resolution());
        assert_eq!(mismatched.pending_unflip(), Some(pending));

        assert!(!TurnOutcome::Ignored.is_effective());
        assert!(!TurnOutcome::Ignored.is_resolution());
    }

    #[test]
    fn test_serialization() {
        let pending = PendingUnflip {
            first: TileId::new(4),
            second: TileId::new(9),
            delay_ms: 750,
            generation: Generation(3),
        };

        let json = serde_json::to_string(&pending).unwrap();
        let deserialized: PendingUnflip = serde_json::from_str(&json).unwrap();
        assert_eq!(pending, deserialized);
    }
}
