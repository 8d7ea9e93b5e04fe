//! The board: a dense, ordered tile arena with stable-id lookup.
//!
//! Tiles live in a `Vec` in display order; a `TileId -> index` map gives
//! O(1) lookup without pointer aliasing. Ids are assigned densely after
//! the shuffle, so the arena never moves a tile for the lifetime of a
//! game.
//!
//! ## Usage
//!
//! ```
//! use memory_pairs::board::Board;
//! use memory_pairs::core::{GameRng, Symbol};
//!
//! let symbols = [Symbol::new(0), Symbol::new(1), Symbol::new(2)];
//! let mut rng = GameRng::new(42);
//! let board = Board::deal(&symbols, &mut rng);
//!
//! assert_eq!(board.len(), 6); // two tiles per symbol
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::core::tile::{Symbol, Tile, TileId};

/// Ordered collection of tiles for one game.
///
/// Exactly two tiles per distinct symbol, shuffled at creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    /// Tiles in display order. Never reordered after the deal.
    tiles: Vec<Tile>,

    /// Tile lookup: id -> index into `tiles`.
    index: FxHashMap<TileId, usize>,
}

impl Board {
    /// Deal a new board: two copies of each symbol, uniformly shuffled,
    /// fresh dense ids assigned in board order.
    ///
    /// Panics if `symbols` is empty or contains duplicates - that is a
    /// programming error, not a gameplay input.
    #[must_use]
    pub fn deal(symbols: &[Symbol], rng: &mut GameRng) -> Self {
        assert!(!symbols.is_empty(), "Symbol set must be non-empty");
        {
            let mut sorted = symbols.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), symbols.len(), "Symbol set must not contain duplicates");
        }

        let mut deck: Vec<Symbol> = Vec::with_capacity(symbols.len() * 2);
        deck.extend_from_slice(symbols);
        deck.extend_from_slice(symbols);
        rng.shuffle(&mut deck);

        Self::from_symbols(deck)
    }

    /// Build a board with an explicit symbol order (no shuffle).
    ///
    /// Used for deterministic tests and replays. Panics unless every
    /// symbol appears exactly twice.
    #[must_use]
    pub fn from_layout(layout: &[Symbol]) -> Self {
        assert!(!layout.is_empty(), "Layout must be non-empty");

        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for &symbol in layout {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        assert!(
            counts.values().all(|&n| n == 2),
            "Every symbol in a layout must appear exactly twice"
        );

        Self::from_symbols(layout.to_vec())
    }

    fn from_symbols(deck: Vec<Symbol>) -> Self {
        let tiles: Vec<Tile> = deck
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Tile::new(TileId::new(i as u32), symbol))
            .collect();

        let index = tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| (tile.id, i))
            .collect();

        Self { tiles, index }
    }

    /// Number of tiles on the board (2x the distinct symbol count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// A board is never empty; provided for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in display order, read-only.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.index.get(&id).map(|&i| &self.tiles[i])
    }

    /// Look up a tile by id, mutably.
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        match self.index.get(&id).copied() {
            Some(i) => Some(&mut self.tiles[i]),
            None => None,
        }
    }

    /// Have all tiles been matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(|t| t.matched)
    }

    /// Number of matched tiles.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count()
    }

    /// The ids of the other tile carrying the same symbol as `id`.
    ///
    /// Returns `None` for an unknown id. Every symbol appears exactly
    /// twice, so for a known id this always finds a partner.
    #[must_use]
    pub fn partner_of(&self, id: TileId) -> Option<TileId> {
        let tile = self.get(id)?;
        self.tiles
            .iter()
            .find(|t| t.symbol == tile.symbol && t.id != id)
            .map(|t| t.id)
    }
}
