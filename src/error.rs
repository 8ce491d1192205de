//! Setup errors
//!
//! The per-tick core is total; everything that can fail happens while
//! loading settings or placing the initial asteroid field.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A setting is outside the range the simulation can run with
    #[error("setting '{name}' = {value} is invalid: {reason}")]
    InvalidSetting {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Rejection sampling found no free spot for an asteroid
    #[error("no clear position found for asteroid {index} after {attempts} attempts")]
    PlacementExhausted { index: usize, attempts: u32 },

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("failed to read settings file: {0}")]
    SettingsIo(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
