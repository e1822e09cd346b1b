//! Core engine types: players, tokens, state, actions, events, RNG,
//! configuration and errors.
//!
//! Nothing here knows the movement rules; see `rules` for those.

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;
pub mod token;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, PlayerProfile};
pub use error::{ConfigError, DiceError, EngineError, Operation, SnapshotError};
pub use event::{EventList, GameEvent};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use state::{GameState, Phase};
pub use token::{Token, TokenState, FINISH_PATH_LENGTH, TOKENS_PER_PLAYER};
