//! Procedurally generated asteroids
//!
//! An asteroid is a jagged polygon: `vertex_count` points spaced evenly around
//! a circle, each pushed in or out by its own radial offset. Shape and velocity
//! are rolled once at creation; only the position changes afterwards.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{WorldBounds, polar_to_cartesian};

/// Generation parameters for new asteroids
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleParams {
    /// Maximum speed per axis (pixels per second)
    pub base_speed: f32,
    /// Diameter (pixels)
    pub base_radius: f32,
    /// Vertex irregularity (0 - 1)
    pub jag: f32,
    pub mean_vertex_count: u32,
}

/// A drifting asteroid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Pixels per tick, fixed for the asteroid's lifetime
    pub vel: Vec2,
    pub radius: f32,
    /// Rotation of vertex 0 (radians)
    pub angle: f32,
    pub vertex_count: u32,
    /// Radial multiplier per vertex, each in [1 - jag, 1 + jag]
    pub offsets: Vec<f32>,
}

/// Roll a new asteroid at `pos`
pub fn create_obstacle<R: Rng>(
    pos: Vec2,
    params: &ObstacleParams,
    fps: f32,
    rng: &mut R,
) -> Obstacle {
    let vel = Vec2::new(
        random_axis_speed(params.base_speed, fps, rng),
        random_axis_speed(params.base_speed, fps, rng),
    );

    let angle = rng.random::<f32>() * TAU;

    let mean = params.mean_vertex_count as f32;
    // floor(u * (mean + 1) + mean / 2), never below one vertex
    let vertex_count = ((rng.random::<f32>() * (mean + 1.0) + mean / 2.0).floor() as u32).max(1);

    let offsets = (0..vertex_count)
        .map(|_| rng.random::<f32>() * params.jag * 2.0 + 1.0 - params.jag)
        .collect();

    Obstacle {
        pos,
        vel,
        radius: params.base_radius / 2.0,
        angle,
        vertex_count,
        offsets,
    }
}

fn random_axis_speed<R: Rng>(base_speed: f32, fps: f32, rng: &mut R) -> f32 {
    let speed = rng.random::<f32>() * base_speed / fps;
    if rng.random_bool(0.5) { speed } else { -speed }
}

impl Obstacle {
    /// Drift one tick and wrap around the world edges.
    ///
    /// Leaving past the high edge snaps to `+radius`, not `-radius` like the ship.
    pub fn advance(&mut self, bounds: &WorldBounds) {
        self.pos += self.vel;
        self.pos.x = wrap_axis(self.pos.x, bounds.width, self.radius);
        self.pos.y = wrap_axis(self.pos.y, bounds.height, self.radius);
    }

    /// Polygon outline in world space, one point per vertex
    pub fn silhouette(&self) -> Vec<Vec2> {
        jagged_polygon(self.pos, self.radius, self.angle, &self.offsets)
    }
}

/// Vertex `i` = pos + radius * offsets[i] * (cos, sin)(angle + i * 2π / n)
pub fn jagged_polygon(pos: Vec2, radius: f32, angle: f32, offsets: &[f32]) -> Vec<Vec2> {
    let step = TAU / offsets.len() as f32;
    offsets
        .iter()
        .enumerate()
        .map(|(i, offset)| pos + polar_to_cartesian(radius * offset, angle + i as f32 * step))
        .collect()
}

fn wrap_axis(value: f32, bound: f32, radius: f32) -> f32 {
    if value < -radius {
        bound + radius
    } else if value > bound + radius {
        radius
    } else {
        value
    }
}
