//! Tokens and their lifecycle.
//!
//! A token moves strictly forward through its states:
//!
//! ```text
//! AtHome -> OnTrack -> OnFinishPath -> Finished
//! ```
//!
//! The single backward edge is a capture, which sends an `OnTrack` token
//! back to `AtHome`.

use serde::{Deserialize, Serialize};

/// Tokens owned by each player.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Cells in each player's private finish lane.
pub const FINISH_PATH_LENGTH: u8 = 6;

/// Where a token currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenState {
    /// Waiting in the player's base; needs a 6 to enter play.
    #[default]
    AtHome,
    /// On the shared track, at an absolute cell in `0..BOARD_SIZE`.
    OnTrack(u8),
    /// In the player's finish lane, at a step in `0..FINISH_PATH_LENGTH`.
    OnFinishPath(u8),
    /// Reached the center. Terminal.
    Finished,
}

impl TokenState {
    /// Ordinal of the state along the lifecycle (0 = home, 3 = finished).
    #[must_use]
    pub const fn stage(self) -> u8 {
        match self {
            TokenState::AtHome => 0,
            TokenState::OnTrack(_) => 1,
            TokenState::OnFinishPath(_) => 2,
            TokenState::Finished => 3,
        }
    }

    /// Absolute track cell, if the token is on the shared track.
    #[must_use]
    pub const fn track_position(self) -> Option<u8> {
        match self {
            TokenState::OnTrack(position) => Some(position),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenState::AtHome => write!(f, "home"),
            TokenState::OnTrack(position) => write!(f, "track {}", position),
            TokenState::OnFinishPath(step) => write!(f, "finish path {}", step),
            TokenState::Finished => write!(f, "finished"),
        }
    }
}

/// A single playing piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub state: TokenState,
}

impl Token {
    #[must_use]
    pub const fn new(state: TokenState) -> Self {
        Self { state }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, TokenState::Finished)
    }

    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self.state, TokenState::AtHome)
    }
}
