//! Player ship kinematics
//!
//! Screen space: x grows right, y grows down. A heading of 0 faces right and
//! π/2 faces up the screen, so thrust subtracts from `vel.y`.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::ControlIntent;
use crate::WorldBounds;

/// Per-tick integration parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipParams {
    /// Pixels per second per second
    pub thrust_accel: f32,
    /// Velocity decay coefficient while coasting
    pub friction: f32,
    pub fps: f32,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in radians (accumulates without normalization)
    pub heading: f32,
    /// Radians per tick, copied from the control intent
    pub angular_rate: f32,
    /// Pixels per tick
    pub vel: Vec2,
    pub thrusting: bool,
    pub radius: f32,
}

impl Ship {
    /// Ship at rest at `pos`, facing up the screen
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            heading: FRAC_PI_2,
            angular_rate: 0.0,
            vel: Vec2::ZERO,
            thrusting: false,
            radius,
        }
    }

    /// Unit vector the nose points along (screen space)
    #[inline]
    pub fn facing(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), -self.heading.sin())
    }

    /// Advance one tick: thrust or coast, turn, move, wrap.
    ///
    /// Thrust uses the heading from the start of the tick; the turn is applied
    /// afterwards.
    pub fn advance(&mut self, intent: &ControlIntent, params: &ShipParams, bounds: &WorldBounds) {
        self.thrusting = intent.thrusting;
        self.angular_rate = intent.rotation_rate;

        if self.thrusting {
            self.vel += self.facing() * params.thrust_accel / params.fps;
        } else {
            self.vel -= params.friction * self.vel / params.fps;
        }

        self.heading += self.angular_rate;
        self.pos += self.vel;

        self.pos.x = wrap_axis(self.pos.x, bounds.width, self.radius);
        self.pos.y = wrap_axis(self.pos.y, bounds.height, self.radius);
    }
}

fn wrap_axis(value: f32, bound: f32, radius: f32) -> f32 {
    if value < -radius {
        bound + radius
    } else if value > bound + radius {
        -radius
    } else {
        value
    }
}
