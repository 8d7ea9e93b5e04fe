//! Turn history for replay and presentation diffing.
//!
//! Every effective selection appends a `TurnRecord`. The history lives in
//! an `im::Vector` on the `Game`, so snapshotting a game clones it in
//! O(1). Ignored selections are not recorded - they had no effect.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::tile::TileId;

/// What an effective selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnKind {
    /// Turn-opening selection: one tile flipped face-up.
    Opened,
    /// Turn-resolving selection: the pair matched.
    Matched,
    /// Turn-resolving selection: the pair did not match.
    Mismatched,
}

/// A recorded selection with the state it left behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// What happened.
    pub kind: TurnKind,

    /// The tiles involved: one for `Opened`, two for resolutions.
    /// SmallVec keeps both cases inline without heap allocation.
    pub tiles: SmallVec<[TileId; 2]>,

    /// Completed-move count after this selection.
    pub move_number: u32,

    /// Score after this selection.
    pub score_after: i64,
}

impl TurnRecord {
    /// Record a turn-opening selection.
    #[must_use]
    pub fn opened(tile: TileId, move_number: u32, score_after: i64) -> Self {
        Self {
            kind: TurnKind::Opened,
            tiles: SmallVec::from_slice(&[tile]),
            move_number,
            score_after,
        }
    }

    /// Record a turn-resolving selection.
    #[must_use]
    pub fn resolved(
        kind: TurnKind,
        first: TileId,
        second: TileId,
        move_number: u32,
        score_after: i64,
    ) -> Self {
        debug_assert!(kind != TurnKind::Opened);
        Self {
            kind,
            tiles: SmallVec::from_slice(&[first, second]),
            move_number,
            score_after,
        }
    }
}
