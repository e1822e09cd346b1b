//! Stateful turn engine.
//!
//! `Engine` owns the current snapshot, a dice source and the listeners. Each
//! accepted input replaces the snapshot with the one produced by the pure
//! transitions in `machine` and then notifies every listener.
//!
//! ## Example
//!
//! ```
//! use ludo_engine::dice::FixedDice;
//! use ludo_engine::{Engine, GameConfig, Phase};
//!
//! let dice = FixedDice::new([6, 3]).unwrap();
//! let mut engine = Engine::with_dice(GameConfig::default(), dice).unwrap();
//!
//! let outcome = engine.roll().unwrap();
//! assert_eq!(outcome.value, 6);
//!
//! let state = engine.select_token(0).unwrap();
//! assert_eq!(state.phase, Phase::AwaitingRoll);
//! ```

use crate::core::{ConfigError, EngineError, GameConfig, GameState, Operation, Phase};
use crate::dice::{Dice, RandomDice};

use super::machine::{self, RollOutcome};
use super::observer::{Observers, SubscriptionId};
use super::snapshot;

/// A running game.
#[derive(Debug)]
pub struct Engine<D: Dice = RandomDice> {
    config: GameConfig,
    dice: D,
    state: GameState,
    observers: Observers,
}

impl Engine<RandomDice> {
    /// Engine with fair dice, seeded from `config.seed` when present.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let dice = RandomDice::from_config(&config);
        Self::with_dice(config, dice)
    }
}

impl<D: Dice> Engine<D> {
    /// Engine rolling `dice`.
    pub fn with_dice(config: GameConfig, dice: D) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        Ok(Self {
            config,
            dice,
            state,
            observers: Observers::new(),
        })
    }

    /// Resume from a saved snapshot.
    ///
    /// The snapshot must be internally consistent (see `snapshot::validate`);
    /// use `replay` to also check that its history leads to it.
    pub fn with_state(config: GameConfig, dice: D, state: GameState) -> Result<Self, ConfigError> {
        snapshot::validate(&state)?;
        let mut engine = Self::with_dice(config, dice)?;
        engine.state = state;
        Ok(engine)
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Roll for the current player.
    ///
    /// Rejected calls do not consume a die face.
    pub fn roll(&mut self) -> Result<RollOutcome, EngineError> {
        if self.state.phase != Phase::AwaitingRoll {
            return Err(EngineError::InvalidPhase {
                operation: Operation::Roll,
                phase: self.state.phase,
            });
        }

        let value = self.dice.roll();
        let next = machine::roll(&self.state, value)?;
        let outcome = RollOutcome {
            value,
            legal_tokens: next.legal_tokens.clone(),
        };
        self.publish(next);
        Ok(outcome)
    }

    /// Move the current player's token `index` with the pending roll.
    pub fn select_token(&mut self, index: usize) -> Result<&GameState, EngineError> {
        let next = machine::select_token(&self.state, index)?;
        self.publish(next);
        Ok(&self.state)
    }

    /// Start over with the same configuration.
    ///
    /// Listeners stay subscribed and the dice keep their position.
    pub fn restart(&mut self) -> &GameState {
        log::info!("restarting game after {} actions", self.state.history.len());
        let fresh = machine::restart(&self.config);
        self.publish(fresh);
        &self.state
    }

    /// Register a listener for every accepted snapshot.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + Send + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    /// Remove a listener. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn publish(&mut self, next: GameState) {
        self.state = next;
        self.observers.notify(&self.state);
    }
}
