//! The matching-pairs game engine.
//!
//! A `Game` is a pure state machine. Per turn it moves between two
//! phases:
//!
//! ```text
//! Idle --select(tile)--> AwaitingSecond              (tile flips up)
//! AwaitingSecond --select(tile2), match--> Idle      (+reward, both matched)
//! AwaitingSecond --select(tile2), mismatch--> Idle   (-penalty floored at 0,
//!                                                     caller owes an unflip)
//! ```
//!
//! Invalid selections (unknown id, matched or face-up tile, finished
//! game) are absorbed as no-ops: the inputs originate from UI taps that
//! may race against rendering state, so they are not errors.

use im::Vector;

use crate::board::Board;
use crate::core::config::GameConfig;
use crate::core::rng::GameRng;
use crate::core::tile::{Symbol, Tile, TileId};
use crate::events::GameEvent;

use super::history::{TurnKind, TurnRecord};
use super::outcome::{Generation, PendingUnflip, TurnOutcome};

/// Per-turn phase: is the engine waiting for a second tile?
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnPhase {
    /// No tile is pending; the next selection opens a turn.
    Idle,
    /// One tile is face-up and unresolved; the next selection resolves
    /// the turn against it.
    AwaitingSecond(TileId),
}

/// The aggregate root: board, turn phase, score, moves, completion.
///
/// Mutated only through [`Game::select_tile`], [`Game::unflip`], and
/// [`Game::new_game`]. Everything else is a read accessor; the
/// presentation layer re-renders from those (and from the drained
/// [`GameEvent`]s) after each mutating call.
///
/// All mutation is synchronous on one logical thread. In a
/// multi-threaded host, wrap the whole `Game` in a single mutex so the
/// three mutators stay atomic with respect to each other - there is no
/// interior locking.
///
/// ## Example
///
/// ```
/// use memory_pairs::{Game, GameConfig, Symbol, TurnOutcome};
///
/// let symbols: Vec<Symbol> = (0..8).map(Symbol::new).collect();
/// let mut game = Game::new(GameConfig::default(), &symbols, 42);
///
/// assert_eq!(game.tiles().len(), 16);
///
/// let first = game.tiles()[0].id;
/// assert!(matches!(game.select_tile(first), TurnOutcome::Opened(_)));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    /// The distinct symbol alphabet, kept for re-deals.
    symbols: Vec<Symbol>,
    board: Board,
    phase: TurnPhase,
    score: i64,
    moves: u32,
    complete: bool,
    generation: Generation,
    history: Vector<TurnRecord>,
    /// Events since the last drain.
    events: Vec<GameEvent>,
    rng: GameRng,
}

impl Game {
    /// Deal a fresh game from a symbol set and seed.
    ///
    /// Builds two tiles per symbol, uniformly shuffled, all face-down,
    /// counters zeroed, generation 0. Panics if `symbols` is empty or
    /// contains duplicates - that is a programming error, not a UI race.
    #[must_use]
    pub fn new(config: GameConfig, symbols: &[Symbol], seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deal_rng = rng.fork();
        let board = Board::deal(symbols, &mut deal_rng);

        let mut game = Self {
            config,
            symbols: symbols.to_vec(),
            board,
            phase: TurnPhase::Idle,
            score: 0,
            moves: 0,
            complete: false,
            generation: Generation::default(),
            history: Vector::new(),
            events: Vec::new(),
            rng,
        };
        game.emit_started();
        game
    }

    /// Deal a game with an explicit tile layout (no shuffle).
    ///
    /// `layout` lists the symbol of each board position in order; every
    /// symbol must appear exactly twice (panics otherwise). The seed is
    /// only used for subsequent [`Game::new_game`] re-deals. Intended
    /// for deterministic tests and replays.
    #[must_use]
    pub fn from_layout(config: GameConfig, layout: &[Symbol], seed: u64) -> Self {
        let board = Board::from_layout(layout);

        let mut symbols = Vec::new();
        for &symbol in layout {
            if !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }

        let mut game = Self {
            config,
            symbols,
            board,
            phase: TurnPhase::Idle,
            score: 0,
            moves: 0,
            complete: false,
            generation: Generation::default(),
            history: Vector::new(),
            events: Vec::new(),
            rng: GameRng::new(seed),
        };
        game.emit_started();
        game
    }

    // === Mutations ===

    /// Select a tile, opening or resolving a turn.
    ///
    /// Precondition violations (unknown id, matched tile, face-up tile,
    /// finished game) silently no-op and return [`TurnOutcome::Ignored`].
    ///
    /// With no pending selection the tile flips face-up and becomes the
    /// pending selection (`Opened`). With a pending selection this is
    /// the second tile of the turn: the move counter increments, the
    /// tile flips face-up, and the pair resolves - equal symbols mark
    /// both tiles matched and add the reward (`Matched`); unequal
    /// symbols subtract the penalty, floored at zero, and hand the
    /// caller a [`PendingUnflip`] intent (`Mismatched`). Either way the
    /// pending selection clears, and if every tile is now matched the
    /// game completes.
    pub fn select_tile(&mut self, id: TileId) -> TurnOutcome {
        if self.complete {
            return TurnOutcome::Ignored;
        }
        match self.board.get(id) {
            Some(tile) if tile.is_selectable() => {}
            _ => return TurnOutcome::Ignored,
        }

        match self.phase {
            TurnPhase::Idle => self.open_turn(id),
            TurnPhase::AwaitingSecond(first) => self.resolve_turn(first, id),
        }
    }

    fn open_turn(&mut self, id: TileId) -> TurnOutcome {
        if let Some(tile) = self.board.get_mut(id) {
            tile.flip_up();
        }
        self.phase = TurnPhase::AwaitingSecond(id);
        self.events.push(GameEvent::TileFlipped { tile: id });
        self.history
            .push_back(TurnRecord::opened(id, self.moves, self.score));
        TurnOutcome::Opened(id)
    }

    fn resolve_turn(&mut self, first: TileId, second: TileId) -> TurnOutcome {
        self.moves += 1;
        self.phase = TurnPhase::Idle;

        if let Some(tile) = self.board.get_mut(second) {
            tile.flip_up();
        }
        self.events.push(GameEvent::TileFlipped { tile: second });

        let first_symbol = self.board.get(first).map(|t| t.symbol);
        let second_symbol = self.board.get(second).map(|t| t.symbol);
        let is_match = first_symbol.is_some() && first_symbol == second_symbol;

        let outcome = if is_match {
            for id in [first, second] {
                if let Some(tile) = self.board.get_mut(id) {
                    tile.mark_matched();
                }
            }
            self.score += self.config.match_reward;
            self.events.push(GameEvent::PairMatched {
                first,
                second,
                reward: self.config.match_reward,
            });
            self.history.push_back(TurnRecord::resolved(
                TurnKind::Matched,
                first,
                second,
                self.moves,
                self.score,
            ));
            TurnOutcome::Matched { first, second }
        } else {
            // Floored at zero: the score never goes negative
            self.score = (self.score - self.config.mismatch_penalty).max(0);
            self.events.push(GameEvent::PairMismatched {
                first,
                second,
                penalty: self.config.mismatch_penalty,
            });
            self.history.push_back(TurnRecord::resolved(
                TurnKind::Mismatched,
                first,
                second,
                self.moves,
                self.score,
            ));
            TurnOutcome::Mismatched(PendingUnflip {
                first,
                second,
                delay_ms: self.config.unflip_delay_ms,
                generation: self.generation,
            })
        };

        if self.board.all_matched() {
            self.complete = true;
            self.events.push(GameEvent::GameCompleted {
                score: self.score,
                moves: self.moves,
            });
        }

        outcome
    }

    /// Flip two mismatched tiles back face-down after the caller's delay.
    ///
    /// Executes unconditionally except:
    /// - a stale `expected` generation (a timer outliving a `new_game`)
    ///   is rejected wholesale;
    /// - a tile that has since become matched stays face-up;
    /// - a tile that is the current pending selection stays face-up (the
    ///   player re-opened it before the timer fired).
    ///
    /// Idempotent for already-face-down or unknown ids. Returns true if
    /// any tile actually flipped.
    pub fn unflip(&mut self, first: TileId, second: TileId, expected: Generation) -> bool {
        if expected != self.generation {
            return false;
        }

        let pending = match self.phase {
            TurnPhase::AwaitingSecond(id) => Some(id),
            TurnPhase::Idle => None,
        };

        let mut flipped = smallvec::SmallVec::<[TileId; 2]>::new();
        for id in [first, second] {
            if pending == Some(id) {
                continue;
            }
            if let Some(tile) = self.board.get_mut(id) {
                if tile.flip_down() {
                    flipped.push(id);
                }
            }
        }

        if flipped.is_empty() {
            false
        } else {
            self.events.push(GameEvent::TilesUnflipped { tiles: flipped });
            true
        }
    }

    /// Start a fresh game, replacing the current one wholesale.
    ///
    /// Bumps the generation (invalidating any pending unflip timers),
    /// re-deals the same symbol set from a forked RNG stream, and zeroes
    /// score, moves, history, and completion. Never a partial reset.
    pub fn new_game(&mut self) {
        self.generation = self.generation.next();
        let mut deal_rng = self.rng.fork();
        self.board = Board::deal(&self.symbols, &mut deal_rng);
        self.phase = TurnPhase::Idle;
        self.score = 0;
        self.moves = 0;
        self.complete = false;
        self.history = Vector::new();
        self.events.clear();
        self.emit_started();
    }

    fn emit_started(&mut self) {
        self.events.push(GameEvent::GameStarted {
            generation: self.generation,
            tile_count: self.board.len(),
        });
    }

    // === Read Accessors ===

    /// Tiles in display order, read-only.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        self.board.tiles()
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.board.get(id)
    }

    /// The board itself, for callers that want its query helpers.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score. Never negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Completed two-tile turns so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Is every tile matched?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The current game's generation.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The face-up tile awaiting a second selection, if any.
    #[must_use]
    pub fn pending_selection(&self) -> Option<TileId> {
        match self.phase {
            TurnPhase::AwaitingSecond(id) => Some(id),
            TurnPhase::Idle => None,
        }
    }

    /// The scoring/timing configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The distinct symbol alphabet of this game.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// History of effective selections in the current game.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Take all events accumulated since the last drain.
    ///
    /// The presentation layer calls this after each mutating call and
    /// renders from what it gets.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
