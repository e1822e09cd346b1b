//! Consistency checks for snapshots that come from outside the engine.
//!
//! Snapshots built by the transitions are always consistent. A snapshot a
//! host deserialized or assembled by hand is checked before an `Engine`
//! resumes from it.

use crate::board::BOARD_SIZE;
use crate::core::{GameState, Phase, SnapshotError, TokenState, DIE_FACES, FINISH_PATH_LENGTH};
use crate::rules;

/// Check that `state` could have been produced by play.
///
/// Covers seat ids, token ranges, the pending roll and legal set for the
/// phase, and the winner.
pub fn validate(state: &GameState) -> Result<(), SnapshotError> {
    for (seat, player) in state.players.iter() {
        if player.id != seat {
            return Err(SnapshotError::SeatMismatch {
                seat,
                found: player.id,
            });
        }
        for (token, t) in player.tokens.iter().enumerate() {
            let in_range = match t.state {
                TokenState::OnTrack(position) => position < BOARD_SIZE,
                TokenState::OnFinishPath(step) => step < FINISH_PATH_LENGTH,
                TokenState::AtHome | TokenState::Finished => true,
            };
            if !in_range {
                return Err(SnapshotError::TokenOutOfRange {
                    player: seat,
                    token,
                    state: t.state,
                });
            }
        }
    }

    let phase_fits = match (state.phase, state.last_roll) {
        (Phase::AwaitingMove, Some(value)) if (1..=DIE_FACES).contains(&value) => {
            !state.legal_tokens.is_empty()
                && state.legal_tokens == rules::legal_tokens(state, state.current_player, value)
        }
        (Phase::AwaitingMove, _) => false,
        (Phase::AwaitingRoll | Phase::GameOver, last_roll) => {
            state.legal_tokens.is_empty() && last_roll.map_or(true, |v| (1..=DIE_FACES).contains(&v))
        }
    };
    if !phase_fits {
        return Err(SnapshotError::PhaseMismatch {
            phase: state.phase,
            last_roll: state.last_roll,
            legal: state.legal_tokens.clone(),
        });
    }

    let winner_fits = match state.phase {
        Phase::GameOver => state.winner.is_some_and(|w| rules::has_won(state, w)),
        _ => rules::winner(state).is_none(),
    };
    if !winner_fits {
        return Err(SnapshotError::WinnerMismatch {
            recorded: state.winner,
        });
    }

    Ok(())
}
