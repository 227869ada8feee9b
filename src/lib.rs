//! Triball - a bouncing-ball canvas toy
//!
//! Eight colored balls bounce around a rectangular canvas. Whenever three of
//! them overlap each other at the same time, a new ball spawns above the
//! cluster and joins the bouncing.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wall bounces, triple merges)
//! - `renderer`: 2D canvas rendering (browser only)

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

/// Simulation tuning constants
pub mod consts {
    /// Radius shared by every ball
    pub const BALL_RADIUS: f32 = 15.0;

    /// Velocity components at startup are drawn from ±START_SPEED per axis
    pub const START_SPEED: f32 = 3.0;
    /// Velocity components after a reset use the wider ±RESET_SPEED range
    pub const RESET_SPEED: f32 = 4.0;

    /// Vertical lift applied to a merged ball, stacking it above the cluster
    pub const MERGE_LIFT: f32 = 30.0;

    /// Viewport for the native headless run (the web build reads the canvas
    /// element instead)
    pub const HEADLESS_WIDTH: f32 = 500.0;
    pub const HEADLESS_HEIGHT: f32 = 500.0;
}
