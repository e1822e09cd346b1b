//! Player inputs and the action log.
//!
//! Only two inputs change a game: rolling the die and choosing which token to
//! move. Every accepted input is appended to the snapshot's history as an
//! `ActionRecord`, which is enough to rebuild the game deterministically
//! (see `turn::replay`).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// An accepted player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// The die was rolled and showed this face.
    Roll(u8),
    /// The token at this index was moved with the pending roll.
    Select(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll(value) => write!(f, "roll {}", value),
            Action::Select(index) => write!(f, "move token {}", index),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Deterministic replay
/// - Move lists in a UI
/// - Debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Roll(6).to_string(), "roll 6");
        assert_eq!(Action::Select(2).to_string(), "move token 2");
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::new(0), Action::Roll(4), 3, 1);

        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.action, Action::Roll(4));
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::new(1), Action::Select(3), 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
