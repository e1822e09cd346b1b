//! Automated play: token selection policies and a whole-game driver.
//!
//! Used by the `ludo-sim` binary, the playout benchmark and the
//! determinism tests.

pub mod autoplay;
pub mod policy;

pub use autoplay::{Autoplay, PlayoutSummary, DEFAULT_MAX_ACTIONS};
pub use policy::{FirstLegal, GreedyPolicy, Policy, RandomPolicy};
