//! Rebuild a snapshot from its action history.
//!
//! History records carry the rolled faces, so replay needs no dice. Feeding a
//! snapshot's own history back through `replay` with the same configuration
//! reproduces that snapshot.

use crate::core::{Action, ActionRecord, EngineError, GameConfig, GameState};

use super::machine;

/// Re-run `history` from a fresh game.
///
/// Stops at the first record that the game would have rejected.
pub fn replay<'a>(
    config: &GameConfig,
    history: impl IntoIterator<Item = &'a ActionRecord>,
) -> Result<GameState, EngineError> {
    let mut state = GameState::new(config);

    for record in history {
        if record.player != state.current_player {
            return Err(EngineError::OutOfTurn {
                expected: state.current_player,
                found: record.player,
            });
        }
        state = match record.action {
            Action::Roll(value) => machine::roll(&state, value)?,
            Action::Select(index) => machine::select_token(&state, index)?,
        };
    }

    log::trace!("replayed {} actions", state.history.len());
    Ok(state)
}
