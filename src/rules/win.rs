//! Win detection.
//!
//! Moves are applied one token at a time, so at most one player can cross
//! the line in a single transition; the first to do so is the winner.

use crate::core::{GameState, PlayerId};

/// True if `player` has all tokens finished.
#[must_use]
pub fn has_won(state: &GameState, player: PlayerId) -> bool {
    state.player(player).has_won()
}

/// The winner of `state`, if any.
///
/// A recorded winner is final; otherwise seats are scanned in turn order.
#[must_use]
pub fn winner(state: &GameState) -> Option<PlayerId> {
    state
        .winner
        .or_else(|| PlayerId::all().find(|&player| has_won(state, player)))
}
