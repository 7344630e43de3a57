//! Auto-firing arcade shooter: hostiles descend, the ship fires on a fixed
//! cadence, and equipment picked at score thresholds reshapes every shot.
//!
//! The core is deterministic: time arrives as millisecond timestamps from the
//! driver and randomness through an injected `rand::Rng`.

pub mod clock;
pub mod collision;
pub mod config;
pub mod entities;
pub mod equipment;
pub mod error;
pub mod layout;
pub mod logging;
pub mod render;
pub mod session;
pub mod spawner;
