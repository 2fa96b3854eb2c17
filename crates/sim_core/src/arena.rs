//! Builds the static collision world from the authored arena config.

use crate::types::Team;
use collision_static::{Aabb, StaticWorld};
use data_runtime::arena::ArenaCfg;
use glam::{Vec3, vec3};

/// Walls sit on the ground plane: the authored footprint center becomes a
/// box centered at half its height.
#[must_use]
pub fn build_world(cfg: &ArenaCfg) -> StaticWorld {
    let obstacles = cfg
        .walls
        .iter()
        .map(|w| {
            Aabb::from_center_size(
                vec3(w.pos[0], w.size[1] * 0.5, w.pos[1]),
                vec3(w.size[0], w.size[1], w.size[2]),
            )
        })
        .collect();
    let climbs = cfg
        .climbs
        .iter()
        .map(|c| {
            Aabb::from_center_size(
                vec3(c.center[0], c.center[1], c.center[2]),
                vec3(c.size[0], c.size[1], c.size[2]),
            )
        })
        .collect();
    StaticWorld::new(obstacles, climbs)
}

#[must_use]
pub fn spawn_point(cfg: &ArenaCfg, team: Team) -> Vec3 {
    let s = match team {
        Team::Red => cfg.spawn_red,
        Team::Blue => cfg.spawn_blue,
    };
    Vec3::from_array(s)
}
