//! Arena layout loaded from data/config/arena.toml.
//!
//! Walls sit on the ground plane and are authored as a footprint center plus
//! a full size. Climb volumes are full 3D boxes authored separately from the
//! walls they wrap.

use anyhow::{Context, Result};
use serde::Deserialize;

/// A wall: footprint center `(x, z)` on the ground plane plus `(w, h, d)`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WallCfg {
    pub pos: [f32; 2],
    pub size: [f32; 3],
}

/// A climbable volume: full 3D center plus size.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ClimbCfg {
    pub center: [f32; 3],
    pub size: [f32; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArenaCfg {
    /// Half-extent of the square floor.
    pub floor_extent: f32,
    pub spawn_red: [f32; 3],
    pub spawn_blue: [f32; 3],
    #[serde(rename = "wall", default)]
    pub walls: Vec<WallCfg>,
    #[serde(rename = "climb", default)]
    pub climbs: Vec<ClimbCfg>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ArenaError {
    #[error("wall {0} has a non-positive size")]
    BadWallSize(usize),
    #[error("climb volume {0} has a non-positive size")]
    BadClimbSize(usize),
    #[error("{team} spawn sits inside wall {wall}")]
    SpawnInsideWall { team: &'static str, wall: usize },
}

impl Default for ArenaCfg {
    /// The reference map: a 300x300 floor, a center wall, two brick towers
    /// with climbable faces, and one low bridge wall.
    fn default() -> Self {
        Self {
            floor_extent: 150.0,
            spawn_red: [-60.0, 0.0, 0.0],
            spawn_blue: [60.0, 0.0, 0.0],
            walls: vec![
                WallCfg {
                    pos: [0.0, 0.0],
                    size: [10.0, 6.0, 40.0],
                },
                WallCfg {
                    pos: [-40.0, -40.0],
                    size: [20.0, 8.0, 20.0],
                },
                WallCfg {
                    pos: [40.0, 40.0],
                    size: [20.0, 8.0, 20.0],
                },
                WallCfg {
                    pos: [0.0, 50.0],
                    size: [60.0, 4.0, 2.0],
                },
            ],
            // Slightly wider than the towers they wrap so a player standing
            // flush against a face still overlaps the volume.
            climbs: vec![
                ClimbCfg {
                    center: [-40.0, 4.0, -40.0],
                    size: [21.0, 8.0, 21.0],
                },
                ClimbCfg {
                    center: [40.0, 4.0, 40.0],
                    size: [21.0, 8.0, 21.0],
                },
            ],
        }
    }
}

impl ArenaCfg {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/arena.toml");
        let cfg = if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            toml::from_str::<Self>(&txt).context("parse arena TOML")?
        } else {
            Self::default()
        };
        cfg.validate()
            .with_context(|| format!("validate {}", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> std::result::Result<(), ArenaError> {
        for (i, w) in self.walls.iter().enumerate() {
            if w.size.iter().any(|s| *s <= 0.0) {
                return Err(ArenaError::BadWallSize(i));
            }
        }
        for (i, c) in self.climbs.iter().enumerate() {
            if c.size.iter().any(|s| *s <= 0.0) {
                return Err(ArenaError::BadClimbSize(i));
            }
        }
        for (team, spawn) in [("red", self.spawn_red), ("blue", self.spawn_blue)] {
            for (i, w) in self.walls.iter().enumerate() {
                let dx = (spawn[0] - w.pos[0]).abs();
                let dz = (spawn[2] - w.pos[1]).abs();
                if dx < w.size[0] * 0.5 && dz < w.size[2] * 0.5 && spawn[1] < w.size[1] {
                    return Err(ArenaError::SpawnInsideWall { team, wall: i });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_arena_is_valid() {
        let cfg = ArenaCfg::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.walls.len(), 4);
        assert_eq!(cfg.climbs.len(), 2);
    }

    #[test]
    fn spawn_inside_wall_is_rejected() {
        let mut cfg = ArenaCfg::default();
        cfg.spawn_red = [0.0, 0.0, 0.0];
        assert_eq!(
            cfg.validate(),
            Err(ArenaError::SpawnInsideWall { team: "red", wall: 0 })
        );
    }
}
