//! # memory-pairs
//!
//! A matching-pairs card game engine: a board of face-down tiles concealing
//! paired symbols, where the player reveals two tiles per turn and the engine
//! resolves match/mismatch outcomes, tracks score and move count, and detects
//! completion.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: One mutation entry point per concern
//!    (`select_tile`, `unflip`, `new_game`). No timers, no rendering, no
//!    input handling - the presentation layer is an external collaborator.
//!
//! 2. **Deterministic**: Shuffling is driven by an explicit seed. The same
//!    seed always deals the same board, which makes games replayable and
//!    tests exact.
//!
//! 3. **Caller-Scheduled Delays**: A mismatch returns a [`PendingUnflip`]
//!    intent naming the two tiles, the configured delay, and the current
//!    [`Generation`]. The caller schedules the timer and invokes
//!    [`Game::unflip`] when it fires; a stale timer from a previous game is
//!    rejected by the generation guard.
//!
//! 4. **Configuration Over Convention**: Scoring constants and the unflip
//!    delay live in [`GameConfig`], not in the rules.
//!
//! ## Modules
//!
//! - `core`: Tile and symbol types, deterministic RNG, configuration
//! - `board`: Dense tile arena with stable-id lookup and uniform shuffling
//! - `engine`: The game engine - turn resolution, scoring, history
//! - `events`: Notification events drained by the presentation layer

pub mod core;
pub mod board;
pub mod engine;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    GameConfig,
    GameRng, GameRngState,
    Symbol, Tile, TileId,
};

pub use crate::board::Board;

pub use crate::engine::{
    Game, Generation, PendingUnflip, TurnKind, TurnOutcome, TurnRecord,
};

pub use crate::events::GameEvent;
