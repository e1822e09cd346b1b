//! # ludo-engine
//!
//! A deterministic, replayable rules engine for four-player Ludo.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every accepted input produces a new
//!    `GameState`; a rejected input leaves the old one untouched.
//!
//! 2. **Injected randomness**: dice sit behind the `Dice` trait. Seeded dice
//!    give identical games, scripted dice give exact test scenarios.
//!
//! 3. **Replayable**: the action history stores rolled faces, so a snapshot
//!    can be rebuilt from its history without any dice.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`, so
//!   UIs can keep every snapshot they were handed.
//!
//! - **Headless core**: no rendering, timers or I/O. A presentation layer
//!   subscribes to snapshots and calls `roll` / `select_token`.
//!
//! ## Modules
//!
//! - `core`: players, tokens, state, actions, events, RNG, configuration, errors
//! - `board`: track topology, safe cells and occupancy
//! - `dice`: the `Dice` trait with seeded and scripted implementations
//! - `rules`: movement resolution and win detection
//! - `turn`: the turn state machine, the stateful `Engine`, observers and replay
//! - `play`: token selection policies and whole-game autoplay
//!
//! ## Example
//!
//! ```
//! use ludo_engine::play::{Autoplay, GreedyPolicy};
//! use ludo_engine::{Engine, GameConfig};
//!
//! let mut engine = Engine::new(GameConfig::default().with_seed(1)).unwrap();
//! let summary = Autoplay::uniform(|_| GreedyPolicy).run(&mut engine).unwrap();
//! assert!(summary.winner.is_some());
//! ```

pub mod board;
pub mod core;
pub mod dice;
pub mod play;
pub mod rules;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, DiceError, EngineError, GameConfig, GameEvent, GameRng,
    GameRngState, GameState, Operation, Phase, Player, PlayerId, PlayerMap, PlayerProfile,
    SnapshotError, Token, TokenState, FINISH_PATH_LENGTH, PLAYER_COUNT, TOKENS_PER_PLAYER,
};

pub use crate::board::{BOARD_SIZE, SAFE_CELLS};

pub use crate::dice::{Dice, FixedDice, RandomDice};

pub use crate::turn::{replay, Engine, RollOutcome, SubscriptionId};
