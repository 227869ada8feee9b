//! Simulation state and core types
//!
//! The ball collection, the loop phase, and the seeded RNG all live here so a
//! run is reproducible from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Fixed spawn table: position and color of the 8 starting balls.
/// Collection order matters - it is the collision scan order.
const SPAWN_TABLE: [(f32, f32, &str); 8] = [
    (100.0, 100.0, "red"),
    (200.0, 200.0, "blue"),
    (300.0, 150.0, "green"),
    (400.0, 250.0, "yellow"),
    (150.0, 300.0, "purple"),
    (450.0, 350.0, "orange"),
    (250.0, 50.0, "pink"),
    (350.0, 400.0, "cyan"),
];

/// Ball fill color: a CSS named color for the starting set, a generated RGB
/// triple for merged balls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Named(&'static str),
    Rgb(u8, u8, u8),
}

impl Color {
    /// Draw a random RGB color
    pub fn random(rng: &mut impl Rng) -> Self {
        Color::Rgb(
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(0..=255),
        )
    }

    /// CSS color string understood by the canvas fill style
    pub fn to_css(self) -> String {
        match self {
            Color::Named(name) => name.to_string(),
            Color::Rgb(r, g, b) => format!("rgb({r}, {g}, {b})"),
        }
    }
}

/// A simulated ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Positive, constant after creation
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    /// Ball spawned from three mutually overlapping sources: centered on the
    /// cluster, lifted above it, moving with the cluster's average velocity
    pub fn merged(a: &Ball, b: &Ball, c: &Ball, color: Color) -> Self {
        Self {
            pos: (a.pos + b.pos + c.pos) / 3.0 - Vec2::new(0.0, MERGE_LIFT),
            vel: (a.vel + b.vel + c.vel) / 3.0,
            radius: a.radius,
            color,
        }
    }
}

/// The two lifecycle states of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// No per-frame callback scheduled
    Idle,
    /// A per-frame callback is scheduled against the display refresh
    Running,
}

/// Complete simulation state (deterministic)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Current phase
    pub phase: LoopPhase,
    /// Active balls; merged balls append at the end and are never removed
    /// during a run
    pub balls: Vec<Ball>,
    rng: Pcg32,
}

impl SimState {
    /// Create a new state with the 8 starting balls
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let balls = spawn_balls(&mut rng, START_SPEED);
        Self {
            seed,
            width,
            height,
            phase: LoopPhase::Idle,
            balls,
            rng,
        }
    }

    /// Begin running. Returns whether the phase actually changed; a start
    /// while already running is a no-op so the host never schedules a second
    /// frame callback.
    pub fn start(&mut self) -> bool {
        if self.phase == LoopPhase::Idle {
            self.phase = LoopPhase::Running;
            log::info!("simulation started");
            true
        } else {
            false
        }
    }

    /// Stop and respawn the starting set. Reset velocities use the wider
    /// ±RESET_SPEED range.
    pub fn reset(&mut self) {
        self.phase = LoopPhase::Idle;
        self.balls = spawn_balls(&mut self.rng, RESET_SPEED);
        log::info!("simulation reset to {} balls", self.balls.len());
    }

    /// Append the ball merged from the triple at the given indices
    pub fn spawn_merged(&mut self, [i, j, k]: [usize; 3]) {
        let color = Color::random(&mut self.rng);
        let ball = Ball::merged(&self.balls[i], &self.balls[j], &self.balls[k], color);
        self.balls.push(ball);
        log::info!("balls {i}/{j}/{k} merged, {} active", self.balls.len());
    }
}

/// Build the starting set: fixed positions, velocity components drawn
/// uniformly from ±max_speed per axis
fn spawn_balls(rng: &mut Pcg32, max_speed: f32) -> Vec<Ball> {
    SPAWN_TABLE
        .iter()
        .map(|&(x, y, color)| Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(
                rng.random_range(-max_speed..max_speed),
                rng.random_range(-max_speed..max_speed),
            ),
            radius: BALL_RADIUS,
            color: Color::Named(color),
        })
        .collect()
}
