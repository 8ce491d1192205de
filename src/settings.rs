//! Simulation settings
//!
//! Loaded once at session start from JSON. Missing keys fall back to the
//! defaults in [`crate::consts`], so a file only needs the values it changes.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};
use crate::sim::{ObstacleParams, ShipParams};
use crate::WorldBounds;

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Ticks per second
    pub frames_per_second: f32,

    // === Ship ===
    /// Ship width in pixels (radius is half of this)
    pub ship_size: f32,
    /// Thrust acceleration in pixels per second per second
    pub ship_thrust_accel: f32,
    /// Turn speed in degrees per second
    pub turn_speed_deg_per_sec: f32,
    /// Velocity decay coefficient while coasting (0 - 1)
    pub friction_coefficient: f32,

    // === Asteroids ===
    pub obstacle_count: usize,
    /// Maximum speed per axis in pixels per second
    pub obstacle_max_speed: f32,
    /// Asteroid diameter in pixels
    pub obstacle_base_size: f32,
    /// Vertex irregularity (0 - 1)
    pub obstacle_jag: f32,
    pub obstacle_mean_vertices: u32,

    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    /// Seed for asteroid generation (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frames_per_second: FPS,

            ship_size: SHIP_SIZE,
            ship_thrust_accel: SHIP_THRUST,
            turn_speed_deg_per_sec: TURN_SPEED,
            friction_coefficient: FRICTION,

            obstacle_count: ASTEROIDS_NUMBER,
            obstacle_max_speed: ASTEROIDS_SPEED,
            obstacle_base_size: ASTEROIDS_SIZE,
            obstacle_jag: ASTEROIDS_JAG,
            obstacle_mean_vertices: ASTEROIDS_VERT,

            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> SimResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with.
    ///
    /// Includes the placement precondition: the asteroid clearance around the
    /// ship's spawn point must not cover the whole world.
    pub fn validate(&self) -> SimResult<()> {
        positive("frames_per_second", self.frames_per_second)?;
        self.tick_period()?;
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        unit_interval("friction_coefficient", self.friction_coefficient)?;
        unit_interval("obstacle_jag", self.obstacle_jag)?;
        non_negative("ship_size", self.ship_size)?;
        non_negative("ship_thrust_accel", self.ship_thrust_accel)?;
        non_negative("turn_speed_deg_per_sec", self.turn_speed_deg_per_sec)?;
        non_negative("obstacle_max_speed", self.obstacle_max_speed)?;
        non_negative("obstacle_base_size", self.obstacle_base_size)?;

        let clearance = self.spawn_clearance();
        if self.obstacle_count > 0 && clearance >= self.world().half_diagonal() {
            return Err(SimError::InvalidSetting {
                name: "obstacle_base_size",
                value: self.obstacle_base_size,
                reason: "spawn clearance around the ship covers the whole world",
            });
        }
        Ok(())
    }

    pub fn world(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }

    /// Fixed tick period.
    ///
    /// Fails when `1 / fps` is not representable as a non-zero `Duration`.
    pub fn tick_period(&self) -> SimResult<Duration> {
        let fps = self.frames_per_second;
        match Duration::try_from_secs_f32(1.0 / fps) {
            Ok(period) if !period.is_zero() => Ok(period),
            Ok(_) => Err(SimError::InvalidSetting {
                name: "frames_per_second",
                value: fps,
                reason: "tick period rounds down to zero",
            }),
            Err(_) => Err(SimError::InvalidSetting {
                name: "frames_per_second",
                value: fps,
                reason: "tick period is too long to schedule",
            }),
        }
    }

    /// Turn rate applied per tick while a turn key is held (radians)
    pub fn turn_rate(&self) -> f32 {
        self.turn_speed_deg_per_sec.to_radians() / self.frames_per_second
    }

    pub fn ship_radius(&self) -> f32 {
        self.ship_size / 2.0
    }

    /// Minimum distance between the ship and a freshly placed asteroid
    pub fn spawn_clearance(&self) -> f32 {
        self.obstacle_base_size * 2.0 + self.ship_radius()
    }

    pub fn obstacle_params(&self) -> ObstacleParams {
        ObstacleParams {
            base_speed: self.obstacle_max_speed,
            base_radius: self.obstacle_base_size,
            jag: self.obstacle_jag,
            mean_vertex_count: self.obstacle_mean_vertices,
        }
    }

    pub fn ship_params(&self) -> ShipParams {
        ShipParams {
            thrust_accel: self.ship_thrust_accel,
            friction: self.friction_coefficient,
            fps: self.frames_per_second,
        }
    }
}

fn positive(name: &'static str, value: f32) -> SimResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            reason: "must be positive",
        })
    }
}

fn non_negative(name: &'static str, value: f32) -> SimResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            reason: "must not be negative",
        })
    }
}

fn unit_interval(name: &'static str, value: f32) -> SimResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidSetting {
            name,
            value,
            reason: "must be between 0 and 1",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frames_per_second, 30.0);
        assert_eq!(settings.ship_radius(), 15.0);
        assert_eq!(settings.spawn_clearance(), 215.0);
    }

    #[test]
    fn test_derived_rates() {
        let settings = Settings::default();
        // 360 deg/s at 30 fps = 12 degrees per tick
        assert!((settings.turn_rate() - 12f32.to_radians()).abs() < 1e-6);
        let ms = settings.tick_period().unwrap().as_secs_f64() * 1000.0;
        assert!((ms - 33.333).abs() < 0.01);
    }

    #[test]
    fn test_rejects_unschedulable_frame_rates() {
        // Period overflows Duration
        let settings = Settings {
            frames_per_second: 1e-20,
            obstacle_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate().unwrap_err(),
            SimError::InvalidSetting {
                name: "frames_per_second",
                ..
            }
        ));

        // Period rounds to zero nanoseconds
        let settings = Settings {
            frames_per_second: 1e12,
            ..Default::default()
        };
        assert!(matches!(
            settings.tick_period().unwrap_err(),
            SimError::InvalidSetting {
                name: "frames_per_second",
                ..
            }
        ));
        assert!(settings.validate().is_err());

        // Slow but schedulable
        let settings = Settings {
            frames_per_second: 0.5,
            ..Default::default()
        };
        assert_eq!(settings.tick_period().unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "obstacle_count": 12, "seed": 7 }"#).unwrap();
        assert_eq!(settings.obstacle_count, 12);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.world_width, WORLD_WIDTH);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "frames_per_second": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidSetting {
                name: "frames_per_second",
                ..
            }
        ));

        let err = Settings::from_json(r#"{ "friction_coefficient": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidSetting { .. }));

        assert!(matches!(
            Settings::from_json("{ not json").unwrap_err(),
            SimError::SettingsParse(_)
        ));
    }

    #[test]
    fn test_rejects_unplaceable_field() {
        let settings = Settings {
            obstacle_base_size: 400.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        // No asteroids means nothing to place
        let settings = Settings {
            obstacle_base_size: 400.0,
            obstacle_count: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bundled_settings_match_defaults() {
        let settings = Settings::from_json(include_str!("../assets/settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SimError::SettingsIo(_)));
    }
}
