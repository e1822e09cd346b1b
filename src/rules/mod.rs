//! Ludo rules: movement legality, move resolution with captures, and win
//! detection.
//!
//! Everything here is a pure function of a `GameState`; sequencing of rolls
//! and moves lives in `turn`.

pub mod movement;
pub mod win;

pub use movement::{apply, destination, is_legal_move, legal_tokens, Capture, Resolution, SIX};
pub use win::{has_won, winner};
