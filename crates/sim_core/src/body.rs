//! Player kinematics: gravity, jumping, climbing, and wall collision.

use collision_static::{Aabb, StaticWorld};
use data_runtime::input::MovementCfg;
use glam::{Quat, Vec3, vec3};

/// Per-second movement constants (see `data_runtime::input::MovementCfg`
/// for the shipped reference values).
#[derive(Debug, Clone, Copy)]
pub struct MoveTuning {
    pub gravity: f32,
    pub jump_speed: f32,
    pub move_speed: f32,
    pub climb_speed: f32,
    pub eye_height: f32,
}

impl Default for MoveTuning {
    fn default() -> Self {
        Self::from_cfg(&MovementCfg::default())
    }
}

impl MoveTuning {
    #[must_use]
    pub fn from_cfg(cfg: &MovementCfg) -> Self {
        Self {
            gravity: cfg.gravity,
            jump_speed: cfg.jump_speed,
            move_speed: cfg.move_speed,
            climb_speed: cfg.climb_speed,
            eye_height: cfg.eye_height,
        }
    }
}

/// Held movement intents for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub jump: bool,
}

/// Kinematic state of one player. The position is the feet; the collision
/// box is 0.5 x 2.0 x 0.5 centered one unit above it.
#[derive(Debug, Clone, Copy)]
pub struct PlayerBody {
    pub pos: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub vel_y: f32,
    pub grounded: bool,
    pub climbing: bool,
}

impl PlayerBody {
    #[must_use]
    pub fn at(pos: Vec3) -> Self {
        Self {
            pos,
            yaw: 0.0,
            pitch: 0.0,
            vel_y: 0.0,
            grounded: true,
            climbing: false,
        }
    }

    #[must_use]
    pub fn collision_box_at(pos: Vec3) -> Aabb {
        Aabb::from_center_size(pos + vec3(0.0, 1.0, 0.0), vec3(0.5, 2.0, 0.5))
    }

    /// One fixed tick of vertical and horizontal integration.
    pub fn step(
        &mut self,
        intent: &MoveIntent,
        tuning: &MoveTuning,
        world: &StaticWorld,
        dt: f32,
    ) {
        self.climbing = world.overlaps_climb(&Self::collision_box_at(self.pos));

        if self.climbing {
            // Climb input replaces gravity; grounded stays true so the
            // player can jump off the volume. No ground clamp here: a climb
            // volume may extend below the plane.
            self.vel_y = 0.0;
            self.grounded = true;
            if intent.forward {
                self.pos.y += tuning.climb_speed * dt;
            }
            if intent.backward {
                self.pos.y -= tuning.climb_speed * dt;
            }
            if intent.jump {
                self.vel_y = tuning.jump_speed;
                self.grounded = false;
                self.pos.y += self.vel_y * dt;
            }
        } else {
            self.vel_y -= tuning.gravity * dt;
            self.pos.y += self.vel_y * dt;
            if self.pos.y <= 0.0 {
                self.pos.y = 0.0;
                self.vel_y = 0.0;
                self.grounded = true;
            }
            if intent.jump && self.grounded {
                self.vel_y = tuning.jump_speed;
                self.grounded = false;
            }
        }

        // Horizontal intent in local space; forward/back feed the climb axis
        // instead while on a volume.
        let mut dir = Vec3::ZERO;
        if !self.climbing {
            if intent.forward {
                dir.z -= 1.0;
            }
            if intent.backward {
                dir.z += 1.0;
            }
        }
        if intent.strafe_left {
            dir.x -= 1.0;
        }
        if intent.strafe_right {
            dir.x += 1.0;
        }
        if dir.length_squared() > 1e-6 {
            let step = Quat::from_rotation_y(self.yaw) * dir.normalize() * tuning.move_speed * dt;
            let prev = self.pos;
            self.pos.x += step.x;
            self.pos.z += step.z;
            // On any wall overlap, both axes roll back together; diagonal
            // sliding along a wall is deliberately unsupported.
            if world.overlaps_obstacle(&Self::collision_box_at(self.pos)) {
                self.pos.x = prev.x;
                self.pos.z = prev.z;
            }
        }
    }
}
