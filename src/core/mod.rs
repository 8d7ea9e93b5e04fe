//! Core engine types: tiles, symbols, RNG, configuration.
//!
//! This module contains the fundamental building blocks. The engine never
//! interprets symbols - they are opaque identifiers whose only rule is that
//! each one appears on exactly two tiles per game.

pub mod tile;
pub mod rng;
pub mod config;

pub use tile::{Symbol, Tile, TileId};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
