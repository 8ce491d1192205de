//! Initial asteroid belt placement

use glam::Vec2;
use rand::Rng;

use super::obstacle::{Obstacle, ObstacleParams, create_obstacle};
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::error::{SimError, SimResult};
use crate::{WorldBounds, distance_between_points};

/// Place `count` asteroids at random pixel positions, keeping each at least
/// `2 * base_radius + ship_radius` away from the ship.
///
/// Candidates that land too close are resampled, up to
/// [`MAX_PLACEMENT_ATTEMPTS`] per asteroid.
pub fn populate<R: Rng>(
    ship_pos: Vec2,
    ship_radius: f32,
    count: usize,
    params: &ObstacleParams,
    bounds: &WorldBounds,
    fps: f32,
    rng: &mut R,
) -> SimResult<Vec<Obstacle>> {
    let clearance = params.base_radius * 2.0 + ship_radius;
    let mut obstacles = Vec::with_capacity(count);
    let mut rejected = 0u64;

    for index in 0..count {
        let mut attempts = 0u32;
        let pos = loop {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                return Err(SimError::PlacementExhausted { index, attempts });
            }
            attempts += 1;

            let candidate = Vec2::new(
                (rng.random::<f32>() * bounds.width).floor(),
                (rng.random::<f32>() * bounds.height).floor(),
            );
            if distance_between_points(ship_pos, candidate) >= clearance {
                break candidate;
            }
            rejected += 1;
        };

        obstacles.push(create_obstacle(pos, params, fps, rng));
    }

    log::debug!(
        "Placed {} asteroids (clearance {:.1}, {} samples rejected)",
        obstacles.len(),
        clearance,
        rejected
    );

    Ok(obstacles)
}
