//! Pure turn transitions.
//!
//! ```text
//! AwaitingRoll --roll--> AwaitingMove --select--> AwaitingRoll (rolled a 6)
//!      |                                   |----> next seat's AwaitingRoll
//!      |                                   `----> GameOver
//!      `--(no legal move)--> next seat's AwaitingRoll
//! ```
//!
//! Each function takes a snapshot and an input and returns either a brand-new
//! snapshot or a rejection. The input snapshot is never modified, so a
//! rejection needs no rollback.

use smallvec::SmallVec;

use crate::core::{
    Action, EngineError, EventList, GameConfig, GameEvent, GameState, Operation, Phase, DIE_FACES,
    TOKENS_PER_PLAYER,
};
use crate::rules::{self, SIX};

/// Result of an accepted roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// Face rolled.
    pub value: u8,

    /// Tokens that may now be selected. Empty means the turn was forfeited
    /// and play already passed to the next seat.
    pub legal_tokens: SmallVec<[usize; 4]>,
}

impl RollOutcome {
    /// True if the roll could not move any token.
    #[must_use]
    pub fn forfeited(&self) -> bool {
        self.legal_tokens.is_empty()
    }
}

fn expect_phase(state: &GameState, operation: Operation, expected: Phase) -> Result<(), EngineError> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(EngineError::InvalidPhase {
            operation,
            phase: state.phase,
        })
    }
}

/// Apply a roll of `value` for the current player.
///
/// With no legal token the roll is recorded and play passes immediately,
/// even on a 6.
pub fn roll(state: &GameState, value: u8) -> Result<GameState, EngineError> {
    expect_phase(state, Operation::Roll, Phase::AwaitingRoll)?;
    if !(1..=DIE_FACES).contains(&value) {
        return Err(EngineError::InvalidRoll { value });
    }

    let player = state.current_player;
    let legal = rules::legal_tokens(state, player, value);

    let mut next = state.clone();
    next.events.clear();
    next.record_action(Action::Roll(value));
    next.last_roll = Some(value);
    next.events.push(GameEvent::Rolled {
        player,
        value,
        legal: legal.clone(),
    });

    if legal.is_empty() {
        log::debug!("{} rolled {} with no legal move", player, value);
        next.events.push(GameEvent::NoLegalMove { player, value });
        next.pass_turn();
    } else {
        log::debug!("{} rolled {}, legal tokens {:?}", player, value, legal);
        next.legal_tokens = legal;
        next.phase = Phase::AwaitingMove;
    }

    Ok(next)
}

/// Move the current player's token `index` with the pending roll.
pub fn select_token(state: &GameState, index: usize) -> Result<GameState, EngineError> {
    expect_phase(state, Operation::SelectToken, Phase::AwaitingMove)?;
    if index >= TOKENS_PER_PLAYER {
        return Err(EngineError::IllegalMoveIndex { index });
    }
    if !state.legal_tokens.contains(&index) {
        return Err(EngineError::IllegalToken {
            index,
            legal: state.legal_tokens.clone(),
        });
    }
    // AwaitingMove always carries the roll it is waiting on.
    let Some(value) = state.last_roll else {
        return Err(EngineError::InvalidPhase {
            operation: Operation::SelectToken,
            phase: state.phase,
        });
    };

    let player = state.current_player;
    let resolution = rules::apply(state, player, index, value);
    let events: EventList = resolution.events();

    let mut next = resolution.state;
    next.events = events;
    next.record_action(Action::Select(index));
    next.legal_tokens.clear();

    if rules::has_won(&next, player) {
        log::info!("{} wins on turn {}", player, next.turn_number);
        next.winner = Some(player);
        next.phase = Phase::GameOver;
        next.events.push(GameEvent::GameWon { player });
    } else if value == SIX {
        log::debug!("{} rolled a six and goes again", player);
        next.phase = Phase::AwaitingRoll;
        next.events.push(GameEvent::ExtraTurn { player });
    } else {
        next.pass_turn();
    }

    Ok(next)
}

/// A fresh game for `config`, tagged as a restart.
#[must_use]
pub fn restart(config: &GameConfig) -> GameState {
    let mut state = GameState::new(config);
    state.events.push(GameEvent::Restarted);
    state
}
