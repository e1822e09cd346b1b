//! Board topology: pure arithmetic over abstract track positions.
//!
//! No rendering coordinates live here; a UI maps cells to screen space.

pub mod topology;

pub use topology::{
    advance, distance_from_start, is_safe_cell, start_offset, Occupancy, Occupants,
    BOARD_SIZE, FINISH_ENTRY_DISTANCE, SAFE_CELLS, SEAT_SPACING,
};
