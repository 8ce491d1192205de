//! Asteroid Field - a wrap-around ship and asteroid kinematics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, obstacles, per-tick update)
//! - `session`: Session ownership and fixed-rate scheduling
//! - `renderer`: Line geometry for drawing a render frame
//! - `settings`: Data-driven configuration
//! - `error`: Configuration and setup errors

pub mod error;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use session::{FixedStep, Session};
pub use settings::Settings;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const FPS: f32 = 30.0;
    /// Maximum ticks run per scheduler update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Space friction (0 = none, 1 = a lot)
    pub const FRICTION: f32 = 0.7;

    /// Asteroid irregularity (0 = round, 1 = very jagged)
    pub const ASTEROIDS_JAG: f32 = 0.4;
    /// Initial number of asteroids
    pub const ASTEROIDS_NUMBER: usize = 5;
    /// Maximum initial asteroid speed (pixels per second)
    pub const ASTEROIDS_SPEED: f32 = 50.0;
    /// Initial asteroid size (pixels)
    pub const ASTEROIDS_SIZE: f32 = 100.0;
    /// Mean vertex count per asteroid
    pub const ASTEROIDS_VERT: u32 = 10;

    /// Ship width (pixels)
    pub const SHIP_SIZE: f32 = 30.0;
    /// Ship acceleration (pixels per second per second)
    pub const SHIP_THRUST: f32 = 5.0;
    /// Ship rotation speed (degrees per second)
    pub const TURN_SPEED: f32 = 360.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Rejected samples allowed per asteroid before placement gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
}

/// Rectangular world, origin top-left, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Distance from the center to any corner
    #[inline]
    pub fn half_diagonal(&self) -> f32 {
        distance_between_points(Vec2::ZERO, self.center())
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(consts::WORLD_WIDTH, consts::WORLD_HEIGHT)
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance_between_points(a: Vec2, b: Vec2) -> f32 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
