//! Tile identification and state.
//!
//! Every board position is a `Tile` with a stable `TileId` and an opaque
//! `Symbol`. Ids are dense (0..tile_count) and assigned after the shuffle,
//! so a tile's id doubles as its board position for the tile's lifetime
//! within a game.
//!
//! ## Invariant
//!
//! A matched tile is always face-up and never flips back down. The mutators
//! on `Tile` enforce this: `mark_matched` forces the tile face-up, and
//! `flip_down` refuses to act on a matched tile.

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile within a game.
///
/// Stable for the tile's lifetime. Ids are reassigned densely from 0 on
/// every new game, so ids from a previous generation must not be assumed
/// to name the same symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Opaque paired value. Games define what symbols mean (emoji, suits,
/// pictures) - the engine only compares them for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw symbol value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// One board position holding a single symbol instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identifier within the current game.
    pub id: TileId,

    /// The paired value this tile conceals.
    pub symbol: Symbol,

    /// Is this tile currently revealed?
    pub face_up: bool,

    /// Has this tile been permanently resolved as part of a found pair?
    pub matched: bool,
}

impl Tile {
    /// Create a face-down, unmatched tile.
    #[must_use]
    pub fn new(id: TileId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Reveal the tile.
    pub fn flip_up(&mut self) {
        self.face_up = true;
    }

    /// Conceal the tile again.
    ///
    /// Refuses to act on a matched tile: matched tiles stay face-up
    /// permanently. Returns true if the tile actually flipped.
    pub fn flip_down(&mut self) -> bool {
        if self.matched || !self.face_up {
            return false;
        }
        self.face_up = false;
        true
    }

    /// Permanently resolve this tile as part of a found pair.
    ///
    /// Forces the tile face-up to preserve the matched-implies-face-up
    /// invariant.
    pub fn mark_matched(&mut self) {
        self.matched = true;
        self.face_up = true;
    }

    /// Can this tile open or resolve a turn right now?
    ///
    /// False for matched or already face-up tiles - selecting those is
    /// absorbed as a no-op by the engine.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.matched && !self.face_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id() {
        let id = TileId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(TileId::from(7), id);
        assert_eq!(format!("{}", id), "Tile(7)");
    }

    #[test]
    fn test_symbol() {
        let s = Symbol::new(3);
        assert_eq!(s.raw(), 3);
        assert_eq!(format!("{}", s), "Symbol(3)");
        assert_ne!(Symbol::new(3), Symbol::new(4));
    }

    #[test]
    fn test_tile_new_is_face_down() {
        let tile = Tile::new(TileId::new(0), Symbol::new(1));

        assert!(!tile.face_up);
        assert!(!tile.matched);
        assert!(tile.is_selectable());
    }

    #[test]
    fn test_flip_cycle() {
        let mut tile = Tile::new(TileId::new(0), Symbol::new(1));

        tile.flip_up();
        assert!(tile.face_up);
        assert!(!tile.is_selectable());

        assert!(tile.flip_down());
        assert!(!tile.face_up);
        assert!(tile.is_selectable());
    }

    #[test]
    fn test_flip_down_already_down_is_noop() {
        let mut tile = Tile::new(TileId::new(0), Symbol::new(1));
        assert!(!tile.flip_down());
        assert!(!tile.face_up);
    }

    #[test]
    fn test_matched_implies_face_up() {
        let mut tile = Tile::new(TileId::new(0), Symbol::new(1));

        tile.mark_matched();
        assert!(tile.matched);
        assert!(tile.face_up);

        // Matched tiles never flip back
        assert!(!tile.flip_down());
        assert!(tile.face_up);
        assert!(!tile.is_selectable());
    }

    #[test]
    fn test_serialization() {
        let mut tile = Tile::new(TileId::new(2), Symbol::new(5));
        tile.flip_up();

        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
