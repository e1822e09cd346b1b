//! Drive a whole game through the public engine API.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameEvent, Phase, PlayerId, PlayerMap};
use crate::dice::Dice;
use crate::turn::Engine;

use super::policy::Policy;

/// Default action cap per game.
pub const DEFAULT_MAX_ACTIONS: u32 = 10_000;

/// What happened in one automated game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutSummary {
    /// Winner, or `None` if the action cap was hit first.
    pub winner: Option<PlayerId>,

    /// Accepted rolls.
    pub rolls: u32,

    /// Tokens sent home.
    pub captures: u32,

    /// Turn number the game stopped on.
    pub turns: u32,

    /// Accepted rolls plus accepted selections.
    pub actions: u32,
}

impl std::fmt::Display for PlayoutSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Some(winner) => write!(f, "winner={}", winner.0)?,
            None => write!(f, "winner=none")?,
        }
        write!(
            f,
            " turns={} rolls={} captures={} actions={}",
            self.turns, self.rolls, self.captures, self.actions
        )
    }
}

/// Plays games with one policy per seat.
pub struct Autoplay {
    policies: PlayerMap<Box<dyn Policy>>,
    max_actions: u32,
}

impl Autoplay {
    /// Autoplay with `policies` seated in turn order.
    #[must_use]
    pub fn new(policies: PlayerMap<Box<dyn Policy>>) -> Self {
        Self {
            policies,
            max_actions: DEFAULT_MAX_ACTIONS,
        }
    }

    /// Same policy type in every seat.
    #[must_use]
    pub fn uniform<P: Policy + 'static>(factory: impl Fn(PlayerId) -> P) -> Self {
        Self::new(PlayerMap::new(|player| Box::new(factory(player)) as Box<dyn Policy>))
    }

    /// Stop after this many accepted actions.
    #[must_use]
    pub fn with_max_actions(mut self, max_actions: u32) -> Self {
        self.max_actions = max_actions;
        self
    }

    /// Play `engine` from its current snapshot until game over or the cap.
    ///
    /// Errors only if a policy picks a token outside the legal set.
    pub fn run<D: Dice>(&mut self, engine: &mut Engine<D>) -> Result<PlayoutSummary, EngineError> {
        let mut summary = PlayoutSummary::default();

        while summary.actions < self.max_actions {
            match engine.state().phase {
                Phase::GameOver => break,
                Phase::AwaitingRoll => {
                    engine.roll()?;
                    summary.rolls += 1;
                }
                Phase::AwaitingMove => {
                    let state = engine.state();
                    let seat = state.current_player;
                    let legal = state.legal_tokens.clone();
                    let token = self.policies[seat].choose(state, &legal);
                    let next = engine.select_token(token)?;
                    summary.captures += next
                        .events
                        .iter()
                        .filter(|e| matches!(e, GameEvent::TokenCaptured { .. }))
                        .count() as u32;
                }
            }
            summary.actions += 1;
        }

        let state = engine.state();
        summary.winner = state.winner;
        summary.turns = state.turn_number;

        match summary.winner {
            Some(winner) => log::info!("{} won after {} actions", winner, summary.actions),
            None => log::debug!("stopped at the {} action cap", self.max_actions),
        }
        Ok(summary)
    }
}

impl std::fmt::Debug for Autoplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.policies.values().map(|p| p.name()).collect();
        f.debug_struct("Autoplay")
            .field("policies", &names)
            .field("max_actions", &self.max_actions)
            .finish()
    }
}
