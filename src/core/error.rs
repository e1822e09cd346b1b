//! Error types.
//!
//! Every engine rejection is recoverable: the caller keeps the snapshot it
//! already had and may retry with a different input.

use smallvec::SmallVec;

use super::player::PlayerId;
use super::state::Phase;
use super::token::TokenState;

/// Engine input that can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Roll,
    SelectToken,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Roll => write!(f, "roll"),
            Operation::SelectToken => write!(f, "select a token"),
        }
    }
}

/// Rejections from the turn state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cannot {operation} while {phase}")]
    InvalidPhase { operation: Operation, phase: Phase },

    #[error("token {index} cannot move with this roll (legal: {legal:?})")]
    IllegalToken {
        index: usize,
        legal: SmallVec<[usize; 4]>,
    },

    #[error("token index {index} is out of range")]
    IllegalMoveIndex { index: usize },

    #[error("dice produced {value}, expected a face in 1..=6")]
    InvalidRoll { value: u8 },

    #[error("{found} acted out of turn, expected {expected}")]
    OutOfTurn { expected: PlayerId, found: PlayerId },
}

/// Errors in a `GameConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} has an empty name")]
    EmptyName(PlayerId),

    #[error("player name {0:?} is used more than once")]
    DuplicateName(String),

    #[error("{player} has invalid color {color:?}, expected #rrggbb")]
    InvalidColor { player: PlayerId, color: String },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Inconsistencies in a saved `GameState`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("seat {0} does not exist")]
    UnknownSeat(u8),

    #[error("seat {seat} holds {found}")]
    SeatMismatch { seat: PlayerId, found: PlayerId },

    #[error("{player} token {token} is in impossible state {state}")]
    TokenOutOfRange {
        player: PlayerId,
        token: usize,
        state: TokenState,
    },

    #[error("{phase} does not fit roll {last_roll:?} with legal tokens {legal:?}")]
    PhaseMismatch {
        phase: Phase,
        last_roll: Option<u8>,
        legal: SmallVec<[usize; 4]>,
    },

    #[error("recorded winner {recorded:?} does not match the board")]
    WinnerMismatch { recorded: Option<PlayerId> },
}

/// Errors building a scripted dice sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("dice script is empty")]
    Empty,

    #[error("dice face {0} is outside 1..=6")]
    OutOfRange(u8),
}
