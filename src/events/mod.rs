//! Notification events for the presentation layer.
//!
//! The engine is UI-framework agnostic: instead of published reactive
//! fields, every mutating call pushes `GameEvent`s into a buffer that the
//! presentation layer drains with [`crate::engine::Game::drain_events`]
//! and turns into re-renders or animations.
//!
//! Events are descriptive, not prescriptive - they report what already
//! happened to the state. The one scheduling obligation a caller has
//! (run the unflip timer after a mismatch) is carried on the
//! [`crate::engine::TurnOutcome`] return value, not on an event.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::tile::TileId;
use crate::engine::Generation;

/// Something that happened inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh game was dealt (construction or `new_game`).
    GameStarted {
        generation: Generation,
        tile_count: usize,
    },

    /// A tile was revealed by a selection.
    TileFlipped { tile: TileId },

    /// Two tiles resolved as a pair and are now permanently matched.
    PairMatched {
        first: TileId,
        second: TileId,
        reward: i64,
    },

    /// Two tiles resolved as a mismatch; the caller owes an `unflip`.
    PairMismatched {
        first: TileId,
        second: TileId,
        penalty: i64,
    },

    /// Tiles flipped back face-down by `unflip`.
    ///
    /// Only tiles that actually changed appear here - matched or
    /// already-face-down tiles are omitted.
    TilesUnflipped { tiles: SmallVec<[TileId; 2]> },

    /// Every tile is matched; the game is over.
    GameCompleted { score: i64, moves: u32 },
}
