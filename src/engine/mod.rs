//! The game engine: turn resolution, scoring, completion detection.
//!
//! ## Key Types
//!
//! - [`Game`]: the aggregate root, mutated only through `select_tile`,
//!   `unflip`, and `new_game`
//! - [`TurnOutcome`]: explicit result of a selection, so the caller never
//!   has to diff state to learn what happened
//! - [`PendingUnflip`]: the intent a mismatch hands to the caller's timer
//! - [`Generation`]: invalidates stale timers across `new_game`
//! - [`TurnRecord`]: append-only history of effective selections

pub mod game;
pub mod history;
pub mod outcome;

pub use game::Game;
pub use history::{TurnKind, TurnRecord};
pub use outcome::{Generation, PendingUnflip, TurnOutcome};
