//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::is_colliding;
pub use state::{Ball, Color, LoopPhase, SimState};
pub use tick::{find_colliding_triple, step};
