//! Player identification, seats and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the four Ludo seats. Seat order is turn order.
//!
//! ## PlayerMap
//!
//! Per-seat data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! A seat's display profile plus its four tokens.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::PlayerProfile;
use super::error::SnapshotError;
use super::token::{Token, TokenState, TOKENS_PER_PLAYER};

/// Number of seats at a Ludo table.
pub const PLAYER_COUNT: usize = 4;

/// Seat identifier in `0..PLAYER_COUNT`.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`. Deserializing
/// an id outside the table is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player id out of range");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over all seats in turn order.
    ///
    /// ```
    /// use ludo_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = SnapshotError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if usize::from(id) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(SnapshotError::UnknownSeat(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{PlayerId, PlayerMap};
///
/// let mut finished: PlayerMap<u8> = PlayerMap::with_value(0);
/// finished[PlayerId::new(1)] = 2;
/// assert_eq!(finished[PlayerId::new(0)], 0);
/// assert_eq!(finished[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One seat at the table: display profile plus tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat (and turn-order position).
    pub id: PlayerId,

    /// Display name and color.
    pub profile: PlayerProfile,

    /// The player's tokens, indexed `0..TOKENS_PER_PLAYER`.
    pub tokens: [Token; TOKENS_PER_PLAYER],
}

impl Player {
    /// Create a player with every token at home.
    #[must_use]
    pub fn new(id: PlayerId, profile: PlayerProfile) -> Self {
        Self {
            id,
            profile,
            tokens: [Token::default(); TOKENS_PER_PLAYER],
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// Number of tokens that reached the end of the finish path.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_finished()).count()
    }

    /// Number of tokens still waiting at home.
    #[must_use]
    pub fn home_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.state == TokenState::AtHome)
            .count()
    }

    /// True once every token is finished.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.finished_count() == TOKENS_PER_PLAYER
    }
}
