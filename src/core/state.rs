//! Game state snapshots.
//!
//! ## GameState
//!
//! The single source of truth for a game:
//! - Players and their tokens (fixed seat order = turn order)
//! - Current player, turn phase, pending roll and its legal tokens
//! - Winner, once there is one
//! - Events of the transition that produced this snapshot
//! - Full action history
//!
//! Transitions never mutate a published snapshot; they clone it, modify the
//! clone and hand the clone back. The history uses an `im` persistent vector,
//! so cloning a snapshot is cheap no matter how long the game has run.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::event::{EventList, GameEvent};
use super::player::{Player, PlayerId, PlayerMap};
use super::token::{Token, TokenState};

/// Where the turn state machine is resting.
///
/// "Turn ended" is not a resting phase: play passes to the next seat in the
/// same transition and the snapshot shows `AwaitingRoll` for that seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The current player must roll.
    #[default]
    AwaitingRoll,
    /// The current player must pick one of `legal_tokens`.
    AwaitingMove,
    /// Someone won. Terminal.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingRoll => write!(f, "awaiting a roll"),
            Phase::AwaitingMove => write!(f, "awaiting a move"),
            Phase::GameOver => write!(f, "the game is over"),
        }
    }
}

/// Complete game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order.
    pub players: PlayerMap<Player>,

    /// Seat whose turn it is.
    pub current_player: PlayerId,

    /// Turn phase.
    pub phase: Phase,

    /// Most recent roll. Kept after the move so a UI can keep showing the die.
    pub last_roll: Option<u8>,

    /// Tokens of `current_player` that may move with `last_roll`.
    /// Empty unless `phase` is `AwaitingMove`.
    pub legal_tokens: SmallVec<[usize; 4]>,

    /// Winning seat, once the game is over.
    pub winner: Option<PlayerId>,

    /// Turn number (starts at 1, bumps whenever play passes to the next seat).
    pub turn_number: u32,

    /// Action sequence within the turn.
    pub action_sequence: u32,

    /// Events produced by the transition that created this snapshot.
    pub events: EventList,

    /// Every accepted action since the game started.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create the initial snapshot: every token home, player 0 to roll.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            players: PlayerMap::new(|id| Player::new(id, config.players[id].clone())),
            current_player: PlayerId::new(0),
            phase: Phase::AwaitingRoll,
            last_roll: None,
            legal_tokens: SmallVec::new(),
            winner: None,
            turn_number: 1,
            action_sequence: 0,
            events: EventList::new(),
            history: Vector::new(),
        }
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Get one token.
    ///
    /// Panics if `index` is not a valid token index.
    #[must_use]
    pub fn token(&self, player: PlayerId, index: usize) -> Token {
        self.players[player].tokens[index]
    }

    /// Overwrite one token's state.
    ///
    /// Panics if `index` is not a valid token index.
    pub fn set_token(&mut self, player: PlayerId, index: usize, state: TokenState) {
        self.players[player].tokens[index].state = state;
    }

    /// Builder-style `set_token`, handy for setting up positions.
    #[must_use]
    pub fn with_token(mut self, player: PlayerId, index: usize, state: TokenState) -> Self {
        self.set_token(player, index, state);
        self
    }

    /// Builder-style override of whose turn it is.
    #[must_use]
    pub fn with_current_player(mut self, player: PlayerId) -> Self {
        self.current_player = player;
        self
    }

    /// Finished tokens of a player.
    #[must_use]
    pub fn finished_count(&self, player: PlayerId) -> usize {
        self.players[player].finished_count()
    }

    /// True once a winner is set.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Captures reported by the last transition.
    pub fn captures(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().filter(|e| e.is_capture())
    }

    // === Action History ===

    /// Append an action by the current player to the history.
    pub fn record_action(&mut self, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history.push_back(ActionRecord::new(
            self.current_player,
            action,
            self.turn_number,
            sequence,
        ));
    }

    // === Turn Advancement ===

    /// Pass play to the next seat and wait for its roll.
    pub fn pass_turn(&mut self) {
        let from = self.current_player;
        let to = from.next();

        self.current_player = to;
        self.phase = Phase::AwaitingRoll;
        self.legal_tokens.clear();
        self.turn_number += 1;
        self.action_sequence = 0;
        self.events.push(GameEvent::TurnPassed { from, to });
    }
}
