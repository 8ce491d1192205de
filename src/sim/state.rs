//! Simulation state
//!
//! Everything a tick reads or writes, apart from the control intent.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::populate;
use super::obstacle::Obstacle;
use super::ship::Ship;
use crate::error::SimResult;
use crate::settings::Settings;

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Seed the asteroid belt was generated from
    pub seed: u64,
    /// Ticks run so far
    pub time_ticks: u64,
    pub ship: Ship,
    /// Asteroids in creation order (count fixed for the session)
    pub obstacles: Vec<Obstacle>,
}

impl SimulationState {
    /// Ship at the world center, asteroid belt placed around it
    pub fn new(settings: &Settings, seed: u64) -> SimResult<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);

        let world = settings.world();
        let ship = Ship::new(world.center(), settings.ship_radius());
        let obstacles = populate(
            ship.pos,
            ship.radius,
            settings.obstacle_count,
            &settings.obstacle_params(),
            &world,
            settings.frames_per_second,
            &mut rng,
        )?;

        Ok(Self {
            seed,
            time_ticks: 0,
            ship,
            obstacles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance_between_points;

    #[test]
    fn test_new_state() {
        let settings = Settings::default();
        let state = SimulationState::new(&settings, 12345).unwrap();

        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.ship.pos.x, 400.0);
        assert_eq!(state.ship.pos.y, 300.0);
        assert_eq!(state.ship.radius, 15.0);
        assert_eq!(state.obstacles.len(), settings.obstacle_count);
        for obstacle in &state.obstacles {
            let distance = distance_between_points(obstacle.pos, state.ship.pos);
            assert!(distance >= settings.spawn_clearance());
        }
    }

    #[test]
    fn test_same_seed_same_belt() {
        let settings = Settings::default();
        let a = SimulationState::new(&settings, 99).unwrap();
        let b = SimulationState::new(&settings, 99).unwrap();
        let c = SimulationState::new(&settings, 100).unwrap();
        assert_eq!(a.obstacles, b.obstacles);
        assert_ne!(a.obstacles, c.obstacles);
    }

    #[test]
    fn test_state_serializes() {
        let state = SimulationState::new(&Settings::default(), 5).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: SimulationState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.obstacles, state.obstacles);
        assert_eq!(back.ship, state.ship);
    }
}
