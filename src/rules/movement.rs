//! Movement resolution: what a roll does to a chosen token.
//!
//! Resolution is a pure function of `(GameState, player, token, roll)`. It
//! covers leaving home, advancing on the track, entering and walking the
//! finish lane, finishing, and capturing opponents after a plain track move.
//!
//! Finish-lane moves must land exactly on or before the last step; a roll
//! that would overshoot is not a legal move for that token.

use smallvec::SmallVec;

use crate::board::{self, Occupancy, BOARD_SIZE, FINISH_ENTRY_DISTANCE};
use crate::core::{
    EventList, GameEvent, GameState, PlayerId, Token, TokenState, DIE_FACES, FINISH_PATH_LENGTH,
    TOKENS_PER_PLAYER,
};

/// Face that lets a token leave home and grants an extra roll.
pub const SIX: u8 = 6;

/// Check whether `token` may move `value` cells.
///
/// - Values outside `1..=6` are never legal.
/// - Finished tokens never move.
/// - Tokens at home need a 6.
/// - Finish-lane tokens may not overshoot the last step.
/// - Track tokens can always move.
#[must_use]
pub fn is_legal_move(token: Token, value: u8) -> bool {
    if !(1..=DIE_FACES).contains(&value) {
        return false;
    }
    match token.state {
        TokenState::Finished => false,
        TokenState::AtHome => value == SIX,
        TokenState::OnFinishPath(step) => {
            u16::from(step) + u16::from(value) <= u16::from(FINISH_PATH_LENGTH)
        }
        TokenState::OnTrack(_) => true,
    }
}

/// Indices (ascending) of `player`'s tokens that may move `value` cells.
#[must_use]
pub fn legal_tokens(state: &GameState, player: PlayerId, value: u8) -> SmallVec<[usize; 4]> {
    state
        .player(player)
        .tokens
        .iter()
        .enumerate()
        .filter(|&(_, &token)| is_legal_move(token, value))
        .map(|(index, _)| index)
        .collect()
}

/// Where a token of `player` in `from` lands after moving `value` cells.
///
/// Returns `None` when the move is not legal.
#[must_use]
pub fn destination(player: PlayerId, from: TokenState, value: u8) -> Option<TokenState> {
    if !is_legal_move(Token::new(from), value) {
        return None;
    }

    let to = match from {
        TokenState::AtHome => TokenState::OnTrack(board::start_offset(player)),
        // Legality bounds both sums to a few cells past the lane start.
        TokenState::OnFinishPath(step) => finish_lane(step.saturating_add(value)),
        TokenState::OnTrack(position) => {
            let travelled = board::distance_from_start(player, position).saturating_add(value);
            if travelled >= FINISH_ENTRY_DISTANCE {
                finish_lane(travelled - FINISH_ENTRY_DISTANCE)
            } else {
                TokenState::OnTrack(board::advance(position, value))
            }
        }
        TokenState::Finished => return None,
    };
    Some(to)
}

fn finish_lane(step: u8) -> TokenState {
    if step >= FINISH_PATH_LENGTH {
        TokenState::Finished
    } else {
        TokenState::OnFinishPath(step)
    }
}

/// An opponent token sent home by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub player: PlayerId,
    pub token: usize,
    pub position: u8,
}

/// Outcome of moving one token.
#[derive(Clone, Debug)]
pub struct Resolution {
    /// Snapshot after the move and any captures.
    pub state: GameState,

    /// Mover.
    pub player: PlayerId,

    /// Index of the moved token.
    pub token: usize,

    /// Token state before the move.
    pub from: TokenState,

    /// Token state after the move. Equal to `from` if nothing moved.
    pub to: TokenState,

    /// Opponent tokens sent home, in seat then token order.
    pub captures: SmallVec<[Capture; 3]>,
}

impl Resolution {
    /// True if the token changed state.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }

    /// True if this move finished the token.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.moved() && self.to == TokenState::Finished
    }

    /// Events describing the move, captures first-to-last, then completion.
    #[must_use]
    pub fn events(&self) -> EventList {
        let mut events = EventList::new();
        if !self.moved() {
            return events;
        }

        events.push(GameEvent::TokenMoved {
            player: self.player,
            token: self.token,
            from: self.from,
            to: self.to,
        });
        for capture in &self.captures {
            events.push(GameEvent::TokenCaptured {
                by: self.player,
                player: capture.player,
                token: capture.token,
                position: capture.position,
            });
        }
        if self.finished() {
            events.push(GameEvent::TokenFinished {
                player: self.player,
                token: self.token,
                finished_count: self.state.finished_count(self.player),
            });
        }
        events
    }
}

/// Move `player`'s token `token` by `value` cells and resolve captures.
///
/// Captures only happen after a plain track advance, never on leaving home
/// or on entering the finish lane, and never on a safe cell.
///
/// An illegal request (out-of-range index, token that cannot move with
/// `value`) leaves the state unchanged and reports `from == to`.
#[must_use]
pub fn apply(state: &GameState, player: PlayerId, token: usize, value: u8) -> Resolution {
    let unchanged = |from| Resolution {
        state: state.clone(),
        player,
        token,
        from,
        to: from,
        captures: SmallVec::new(),
    };

    if token >= TOKENS_PER_PLAYER {
        return unchanged(TokenState::AtHome);
    }
    let from = state.token(player, token).state;
    let Some(to) = destination(player, from, value) else {
        return unchanged(from);
    };

    let mut next = state.clone();
    next.set_token(player, token, to);
    log::trace!("{} token {} {} -> {} (roll {})", player, token, from, to, value);

    let mut captures = SmallVec::new();
    if let (TokenState::OnTrack(_), TokenState::OnTrack(position)) = (from, to) {
        for (victim, index) in Occupancy::of(&next).capturable(player, position) {
            next.set_token(victim, index, TokenState::AtHome);
            log::trace!("{} captured {} token {} on {}", player, victim, index, position);
            captures.push(Capture {
                player: victim,
                token: index,
                position,
            });
        }
    }

    debug_assert!(to.track_position().map_or(true, |p| p < BOARD_SIZE));

    Resolution {
        state: next,
        player,
        token,
        from,
        to,
        captures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn fresh() -> GameState {
        GameState::new(&GameConfig::default())
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_legality_per_state() {
        for value in 1..=6 {
            assert!(!is_legal_move(Token::new(TokenState::Finished), value));
            assert!(is_legal_move(Token::new(TokenState::OnTrack(30)), value));
            assert_eq!(is_legal_move(Token::new(TokenState::AtHome), value), value == 6);
        }
        assert!(is_legal_move(Token::new(TokenState::OnFinishPath(4)), 2));
        assert!(!is_legal_move(Token::new(TokenState::OnFinishPath(4)), 3));
        assert!(is_legal_move(Token::new(TokenState::OnFinishPath(0)), 6));
    }

    #[test]
    fn test_non_faces_never_legal() {
        for state in [
            TokenState::AtHome,
            TokenState::OnTrack(50),
            TokenState::OnFinishPath(5),
            TokenState::Finished,
        ] {
            for value in [0, 7, 200, u8::MAX] {
                assert!(!is_legal_move(Token::new(state), value));
                assert_eq!(destination(P0, state, value), None);
            }
        }
    }

    #[test]
    fn test_out_of_range_lane_step_does_not_overflow() {
        let stray = TokenState::OnFinishPath(250);
        for value in 1..=6 {
            assert!(!is_legal_move(Token::new(stray), value));
            assert_eq!(destination(P0, stray, value), None);
        }
    }

    #[test]
    fn test_legal_tokens() {
        let state = fresh()
            .with_token(P0, 1, TokenState::OnTrack(10))
            .with_token(P0, 2, TokenState::OnFinishPath(4))
            .with_token(P0, 3, TokenState::Finished);

        assert_eq!(legal_tokens(&state, P0, 3).as_slice(), &[1]);
        assert_eq!(legal_tokens(&state, P0, 2).as_slice(), &[1, 2]);
        assert_eq!(legal_tokens(&state, P0, 6).as_slice(), &[0, 1]);
    }

    #[test]
    fn test_leave_home_on_six() {
        let resolution = apply(&fresh(), P1, 0, 6);

        assert_eq!(resolution.to, TokenState::OnTrack(13));
        assert!(resolution.captures.is_empty());
        assert_eq!(resolution.state.token(P1, 0).state, TokenState::OnTrack(13));
    }

    #[test]
    fn test_leave_home_never_captures() {
        let state = fresh().with_token(P2, 0, TokenState::OnTrack(13));

        let resolution = apply(&state, P1, 0, 6);

        assert!(resolution.captures.is_empty());
        assert_eq!(resolution.state.token(P2, 0).state, TokenState::OnTrack(13));
    }

    #[test]
    fn test_home_without_six_is_noop() {
        let state = fresh();
        let resolution = apply(&state, P0, 0, 5);

        assert!(!resolution.moved());
        assert_eq!(resolution.state, state);
        assert!(resolution.events().is_empty());
    }

    #[test]
    fn test_track_advance_and_capture() {
        let state = fresh()
            .with_token(P0, 0, TokenState::OnTrack(12))
            .with_token(P1, 3, TokenState::OnTrack(15));

        let resolution = apply(&state, P0, 0, 3);

        assert_eq!(resolution.to, TokenState::OnTrack(15));
        assert_eq!(
            resolution.captures.as_slice(),
            &[Capture {
                player: P1,
                token: 3,
                position: 15
            }]
        );
        assert!(resolution.state.token(P1, 3).is_home());
    }

    #[test]
    fn test_stacked_opponents_all_captured() {
        let state = fresh()
            .with_token(P0, 0, TokenState::OnTrack(18))
            .with_token(P1, 0, TokenState::OnTrack(20))
            .with_token(P1, 1, TokenState::OnTrack(20))
            .with_token(P2, 2, TokenState::OnTrack(20));

        let resolution = apply(&state, P0, 0, 2);

        assert_eq!(resolution.captures.len(), 3);
        assert_eq!(resolution.state.player(P1).home_count(), 4);
        assert_eq!(resolution.state.player(P2).home_count(), 4);
    }

    #[test]
    fn test_safe_cell_blocks_capture() {
        let state = fresh()
            .with_token(P0, 0, TokenState::OnTrack(10))
            .with_token(P1, 0, TokenState::OnTrack(14));

        let resolution = apply(&state, P0, 0, 4);

        assert_eq!(resolution.to, TokenState::OnTrack(14));
        assert!(resolution.captures.is_empty());
        assert_eq!(resolution.state.token(P1, 0).state, TokenState::OnTrack(14));
    }

    #[test]
    fn test_own_tokens_stack() {
        let state = fresh()
            .with_token(P0, 0, TokenState::OnTrack(3))
            .with_token(P0, 1, TokenState::OnTrack(5));

        let resolution = apply(&state, P0, 0, 2);

        assert!(resolution.captures.is_empty());
        assert_eq!(resolution.state.token(P0, 1).state, TokenState::OnTrack(5));
    }

    #[test]
    fn test_track_wraps_around() {
        let state = fresh().with_token(P1, 0, TokenState::OnTrack(50));

        let resolution = apply(&state, P1, 0, 4);

        assert_eq!(resolution.to, TokenState::OnTrack(2));
    }

    #[test]
    fn test_enter_finish_path() {
        let state = fresh().with_token(P0, 0, TokenState::OnTrack(48));

        let resolution = apply(&state, P0, 0, 5);

        // distance 48 + 5 = 53, two past the entry threshold of 51
        assert_eq!(resolution.to, TokenState::OnFinishPath(2));
    }

    #[test]
    fn test_enter_finish_path_never_captures() {
        let state = fresh()
            .with_token(P1, 0, TokenState::OnTrack(11))
            .with_token(P0, 0, TokenState::OnTrack(12));

        let resolution = apply(&state, P1, 0, 1);

        assert_eq!(resolution.to, TokenState::OnFinishPath(0));
        assert!(resolution.captures.is_empty());
        assert_eq!(resolution.state.token(P0, 0).state, TokenState::OnTrack(12));
    }

    #[test]
    fn test_finish_from_finish_path() {
        let state = fresh().with_token(P0, 0, TokenState::OnFinishPath(4));

        let resolution = apply(&state, P0, 0, 2);

        assert!(resolution.finished());
        assert_eq!(resolution.state.finished_count(P0), 1);
        assert!(matches!(
            resolution.events().last(),
            Some(GameEvent::TokenFinished { finished_count: 1, .. })
        ));
    }

    #[test]
    fn test_overshoot_is_noop() {
        let state = fresh().with_token(P0, 0, TokenState::OnFinishPath(4));
        let resolution = apply(&state, P0, 0, 3);
        assert!(!resolution.moved());
    }

    #[test]
    fn test_immediate_finish_from_track() {
        // Player 1 standing on cell 12 is a full 51 cells from its start.
        let state = fresh().with_token(P1, 0, TokenState::OnTrack(12));

        let resolution = apply(&state, P1, 0, 6);

        assert_eq!(resolution.to, TokenState::Finished);
        assert_eq!(resolution.state.finished_count(P1), 1);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let state = fresh();
        let resolution = apply(&state, P0, 9, 6);
        assert!(!resolution.moved());
        assert_eq!(resolution.state, state);
    }

    #[test]
    fn test_events_order() {
        let state = fresh()
            .with_token(P0, 0, TokenState::OnTrack(2))
            .with_token(P1, 0, TokenState::OnTrack(4));

        let events = apply(&state, P0, 0, 2).events();

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::TokenMoved { .. }));
        assert!(events[1].is_capture());
    }

    #[test]
    fn test_apply_does_not_touch_input() {
        let state = fresh().with_token(P0, 0, TokenState::OnTrack(2));
        let before = state.clone();
        let _ = apply(&state, P0, 0, 3);
        assert_eq!(state, before);
    }
}
