//! Track arithmetic and board occupancy.
//!
//! The shared track is a ring of `BOARD_SIZE` cells. Each seat enters the
//! ring at its own start offset and leaves it for its private finish lane one
//! cell short of a full lap.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{GameState, PlayerId, PLAYER_COUNT};

/// Cells on the shared track.
pub const BOARD_SIZE: u8 = 52;

/// Cells between two consecutive seats' start offsets.
pub const SEAT_SPACING: u8 = BOARD_SIZE / PLAYER_COUNT as u8;

/// Star cells where tokens cannot be captured.
pub const SAFE_CELLS: [u8; 8] = [1, 9, 14, 22, 27, 35, 40, 48];

/// Distance from the start offset at which a token leaves the track.
pub const FINISH_ENTRY_DISTANCE: u8 = BOARD_SIZE - 1;

/// Absolute cell where `player` enters the track.
#[must_use]
pub const fn start_offset(player: PlayerId) -> u8 {
    player.0 * SEAT_SPACING
}

/// Cells travelled by a token of `player` standing on `position`.
#[must_use]
pub const fn distance_from_start(player: PlayerId, position: u8) -> u8 {
    ((position as u16 + BOARD_SIZE as u16 - start_offset(player) as u16) % BOARD_SIZE as u16) as u8
}

/// True if `position` is a star cell.
#[must_use]
pub fn is_safe_cell(position: u8) -> bool {
    SAFE_CELLS.contains(&position)
}

/// Cell reached by walking `steps` cells forward from `position`.
#[must_use]
pub const fn advance(position: u8, steps: u8) -> u8 {
    ((position as u16 + steps as u16) % BOARD_SIZE as u16) as u8
}

/// Tokens standing on one cell.
pub type Occupants = SmallVec<[(PlayerId, usize); 4]>;

/// Which tokens stand on which track cell.
///
/// Built from a snapshot on demand; tokens at home, in a finish lane or
/// finished never appear.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    cells: FxHashMap<u8, Occupants>,
}

impl Occupancy {
    /// Index every on-track token of `state`.
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let mut cells: FxHashMap<u8, Occupants> = FxHashMap::default();
        for (player, seat) in state.players.iter() {
            for (index, token) in seat.tokens.iter().enumerate() {
                if let Some(position) = token.state.track_position() {
                    cells.entry(position).or_default().push((player, index));
                }
            }
        }
        Self { cells }
    }

    /// Tokens on `position`, in seat then token order.
    #[must_use]
    pub fn at(&self, position: u8) -> &[(PlayerId, usize)] {
        self.cells.get(&position).map(|o| o.as_slice()).unwrap_or(&[])
    }

    /// Opponent tokens on `position` that a token of `mover` would capture.
    ///
    /// Always empty on a safe cell.
    #[must_use]
    pub fn capturable(&self, mover: PlayerId, position: u8) -> Occupants {
        if is_safe_cell(position) {
            return Occupants::new();
        }
        self.at(position)
            .iter()
            .copied()
            .filter(|&(player, _)| player != mover)
            .collect()
    }
}
