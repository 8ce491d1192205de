//! Fixed timestep simulation tick
//!
//! Advances the ship and every asteroid once, then snapshots the result as a
//! [`RenderFrame`] for whatever draws it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::ControlIntent;
use super::obstacle::{Obstacle, jagged_polygon};
use super::ship::Ship;
use super::state::SimulationState;
use crate::WorldBounds;
use crate::settings::Settings;

/// Ship pose as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipPose {
    pub pos: Vec2,
    pub heading: f32,
    pub radius: f32,
    /// Draw the thrust flame
    pub thrusting: bool,
}

impl From<&Ship> for ShipPose {
    fn from(ship: &Ship) -> Self {
        Self {
            pos: ship.pos,
            heading: ship.heading,
            radius: ship.radius,
            thrusting: ship.thrusting,
        }
    }
}

/// Everything needed to rebuild one asteroid polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSilhouette {
    pub pos: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub vertex_count: u32,
    pub offsets: Vec<f32>,
}

impl ObstacleSilhouette {
    /// Polygon outline in world space
    pub fn points(&self) -> Vec<Vec2> {
        jagged_polygon(self.pos, self.radius, self.angle, &self.offsets)
    }
}

impl From<&Obstacle> for ObstacleSilhouette {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            pos: obstacle.pos,
            radius: obstacle.radius,
            angle: obstacle.angle,
            vertex_count: obstacle.vertex_count,
            offsets: obstacle.offsets.clone(),
        }
    }
}

/// Read-only snapshot emitted once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Tick that produced this frame (1-based)
    pub tick: u64,
    /// Area to clear before drawing
    pub world: WorldBounds,
    pub ship: ShipPose,
    /// Asteroids in creation order
    pub obstacles: Vec<ObstacleSilhouette>,
}

/// Advance the simulation by one tick and return the frame to draw
pub fn tick(
    state: &mut SimulationState,
    intent: &ControlIntent,
    settings: &Settings,
) -> RenderFrame {
    let world = settings.world();

    state.ship.advance(intent, &settings.ship_params(), &world);

    for obstacle in &mut state.obstacles {
        obstacle.advance(&world);
    }

    state.time_ticks += 1;

    log::trace!(
        "tick {} ship ({:.1}, {:.1}) vel ({:.3}, {:.3})",
        state.time_ticks,
        state.ship.pos.x,
        state.ship.pos.y,
        state.ship.vel.x,
        state.ship.vel.y
    );

    RenderFrame {
        tick: state.time_ticks,
        world,
        ship: ShipPose::from(&state.ship),
        obstacles: state.obstacles.iter().map(ObstacleSilhouette::from).collect(),
    }
}
