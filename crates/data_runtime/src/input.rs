//! Input and movement tuning loaded from data/config/input.toml.
//!
//! Movement tuning is expressed in per-second units so the simulation
//! scales by the actual tick duration rather than assuming 60 Hz.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MouseCfg {
    pub sensitivity_rad_per_count: f32,
    pub min_pitch_rad: f32,
    pub max_pitch_rad: f32,
}

impl Default for MouseCfg {
    fn default() -> Self {
        Self {
            sensitivity_rad_per_count: 0.002,
            min_pitch_rad: -1.5,
            max_pitch_rad: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MovementCfg {
    /// Downward acceleration, units/s^2.
    pub gravity: f32,
    /// Upward velocity imparted by a jump, units/s.
    pub jump_speed: f32,
    /// Horizontal run speed, units/s.
    pub move_speed: f32,
    /// Vertical speed while on a climbable volume, units/s.
    pub climb_speed: f32,
    /// Aim and projectile origin height above the player base.
    pub eye_height: f32,
}

impl Default for MovementCfg {
    fn default() -> Self {
        Self {
            gravity: 180.0,
            jump_speed: 48.0,
            move_speed: 12.0,
            climb_speed: 6.0,
            eye_height: 1.6,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InputCfg {
    #[serde(default)]
    pub mouse: MouseCfg,
    #[serde(default)]
    pub movement: MovementCfg,
}

impl InputCfg {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/input.toml");
        let mut cfg = if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            toml::from_str::<Self>(&txt).context("parse input TOML")?
        } else {
            Self::default()
        };
        if let Ok(v) = std::env::var("MOUSE_SENS_RAD")
            && let Ok(s) = v.parse()
        {
            cfg.mouse.sensitivity_rad_per_count = s;
        }
        Ok(cfg)
    }
}
