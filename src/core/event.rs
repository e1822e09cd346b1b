//! Game events.
//!
//! Each snapshot carries the events produced by the transition that created
//! it. A UI reads them to raise "captured!", "token home!" and victory
//! notifications without diffing snapshots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::token::TokenState;

/// Something that happened during a single transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// The die was rolled; `legal` lists the tokens that may move.
    Rolled {
        player: PlayerId,
        value: u8,
        legal: SmallVec<[usize; 4]>,
    },

    /// The roll could not move any token; the turn is forfeited.
    NoLegalMove { player: PlayerId, value: u8 },

    /// A token changed state.
    TokenMoved {
        player: PlayerId,
        token: usize,
        from: TokenState,
        to: TokenState,
    },

    /// An opponent token was sent home.
    TokenCaptured {
        by: PlayerId,
        player: PlayerId,
        token: usize,
        position: u8,
    },

    /// A token reached the end of its finish path.
    TokenFinished {
        player: PlayerId,
        token: usize,
        finished_count: usize,
    },

    /// The player rolled a 6 and moves again.
    ExtraTurn { player: PlayerId },

    /// Play passed to the next seat.
    TurnPassed { from: PlayerId, to: PlayerId },

    /// All four tokens of `player` are finished.
    GameWon { player: PlayerId },

    /// A fresh game replaced the previous one.
    Restarted,
}

impl GameEvent {
    /// True for captures.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, GameEvent::TokenCaptured { .. })
    }
}

/// Events of one transition. Rarely more than a handful.
pub type EventList = SmallVec<[GameEvent; 4]>;
