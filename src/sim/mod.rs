//! Deterministic simulation module
//!
//! All kinematics live here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are in pixels per tick)
//! - Seeded RNG only
//! - Stable iteration order (asteroids in creation order)
//! - No rendering or platform dependencies

pub mod field;
pub mod input;
pub mod obstacle;
pub mod ship;
pub mod state;
pub mod tick;

pub use field::populate;
pub use input::{ControlIntent, Key, KeyEvent};
pub use obstacle::{Obstacle, ObstacleParams, create_obstacle, jagged_polygon};
pub use ship::{Ship, ShipParams};
pub use state::SimulationState;
pub use tick::{ObstacleSilhouette, RenderFrame, ShipPose, tick};
