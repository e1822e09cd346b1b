//! Token selection policies for automated play.
//!
//! A policy only picks among the tokens the engine already reported as
//! legal; it never sees the dice and cannot influence a roll.

use crate::board;
use crate::core::{GameRng, GameState, TokenState, FINISH_PATH_LENGTH};
use crate::rules;

// =============================================================================
// Policy Trait
// =============================================================================

/// Chooses which legal token to move.
pub trait Policy: Send {
    /// Pick one of `legal` for the current player of `state`.
    ///
    /// `legal` is never empty and `state` is awaiting a move.
    fn choose(&mut self, state: &GameState, legal: &[usize]) -> usize;

    /// Short name for logs and summaries.
    fn name(&self) -> &'static str;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose(&mut self, state: &GameState, legal: &[usize]) -> usize {
        (**self).choose(state, legal)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// =============================================================================
// Implementations
// =============================================================================

/// Always moves the lowest-indexed legal token.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl Policy for FirstLegal {
    fn choose(&mut self, _state: &GameState, legal: &[usize]) -> usize {
        legal.first().copied().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

/// Uniformly random legal token.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("policy"),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _state: &GameState, legal: &[usize]) -> usize {
        self.rng.choose(legal).copied().unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// One-ply greedy policy.
///
/// Ranks each legal move by, in order:
/// 1. finishing a token
/// 2. number of captures
/// 3. leaving home
/// 4. how far the moving token already is
///
/// Ties go to the lowest index.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn score(state: &GameState, token: usize, value: u8) -> (bool, usize, bool, u8) {
        let player = state.current_player;
        let resolution = rules::apply(state, player, token, value);
        (
            resolution.finished(),
            resolution.captures.len(),
            resolution.from == TokenState::AtHome && resolution.moved(),
            progress(state, token),
        )
    }
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, state: &GameState, legal: &[usize]) -> usize {
        let Some(value) = state.last_roll else {
            return legal.first().copied().unwrap_or_default();
        };
        legal
            .iter()
            .rev()
            .copied()
            .max_by_key(|&token| Self::score(state, token, value))
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

/// Cells travelled by the current player's token `index`.
fn progress(state: &GameState, index: usize) -> u8 {
    let player = state.current_player;
    match state.token(player, index).state {
        TokenState::AtHome => 0,
        TokenState::OnTrack(position) => 1 + board::distance_from_start(player, position),
        TokenState::OnFinishPath(step) => 1 + board::FINISH_ENTRY_DISTANCE + step,
        TokenState::Finished => 1 + board::FINISH_ENTRY_DISTANCE + FINISH_PATH_LENGTH,
    }
}
