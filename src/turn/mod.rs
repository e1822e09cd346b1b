//! Turn sequencing.
//!
//! ## Key Types
//!
//! - `machine`: pure `roll` / `select_token` transitions over snapshots
//! - `Engine`: owns the live snapshot, the dice and the listeners
//! - `Observers`: ordered snapshot subscribers
//! - `replay`: rebuild a snapshot from its history
//! - `snapshot`: consistency checks for snapshots loaded from outside

pub mod engine;
pub mod machine;
pub mod observer;
pub mod replay;
pub mod snapshot;

pub use engine::Engine;
pub use machine::RollOutcome;
pub use observer::{Listener, Observers, SubscriptionId};
pub use replay::replay;
