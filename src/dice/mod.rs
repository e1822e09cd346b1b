//! Dice sources.
//!
//! The turn engine only sees the `Dice` trait, so a game can run on fair
//! seeded dice or on a scripted sequence in tests and replays.

use std::collections::VecDeque;

use crate::core::{DiceError, GameConfig, GameRng, GameRngState, DIE_FACES};

/// A six-sided die.
///
/// Implementations must return a face in `1..=6`; the engine rejects
/// anything else with `EngineError::InvalidRoll`.
pub trait Dice {
    /// Roll once.
    fn roll(&mut self) -> u8;
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Fair die backed by a ChaCha8 `GameRng`.
#[derive(Clone, Debug)]
pub struct RandomDice {
    rng: GameRng,
}

impl RandomDice {
    /// Seeded die: the same seed always yields the same rolls.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("dice"),
        }
    }

    /// Die seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Die for a configuration: seeded if the config has a seed.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        config.seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Capture the roll stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume a roll stream captured with `state`.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> u8 {
        self.rng.roll_die()
    }
}

/// Scripted die that repeats a fixed sequence of faces.
///
/// ```
/// use ludo_engine::dice::{Dice, FixedDice};
///
/// let mut dice = FixedDice::new([6, 3]).unwrap();
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.roll(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct FixedDice {
    faces: VecDeque<u8>,
}

impl FixedDice {
    /// Build a script, rejecting empty scripts and impossible faces.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Result<Self, DiceError> {
        let faces: VecDeque<u8> = faces.into_iter().collect();
        if faces.is_empty() {
            return Err(DiceError::Empty);
        }
        if let Some(&bad) = faces.iter().find(|f| !(1..=DIE_FACES).contains(*f)) {
            return Err(DiceError::OutOfRange(bad));
        }
        Ok(Self { faces })
    }

    /// Faces left before the script wraps around.
    #[must_use]
    pub fn upcoming(&self) -> impl Iterator<Item = u8> + '_ {
        self.faces.iter().copied()
    }
}

impl Dice for FixedDice {
    fn roll(&mut self) -> u8 {
        // Never empty: construction guarantees at least one face.
        let face = self.faces[0];
        self.faces.rotate_left(1);
        face
    }
}
