//! Player hit volumes and ray-segment hit classification.
//!
//! Two axis-aligned sub-volumes per player: a 1.0 x 1.8 x 1.0 body and a
//! 0.4 cube head whose top protrudes above the body.

use collision_static::{Aabb, segment_enter_t};
use glam::{Vec3, vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Body,
    Head,
}

#[must_use]
pub fn body_box(base: Vec3) -> Aabb {
    Aabb::from_center_size(base + vec3(0.0, 0.9, 0.0), vec3(1.0, 1.8, 1.0))
}

#[must_use]
pub fn head_box(base: Vec3) -> Aabb {
    Aabb::from_center_size(base + vec3(0.0, 1.7, 0.0), vec3(0.4, 0.4, 0.4))
}

/// First intersection of the segment `p0 -> p1` with the player standing at
/// `base`. The sub-volume entered first decides the region; on an exact tie
/// the head wins (it is the smaller, protruding volume). Exactly one region
/// is reported per hit.
#[must_use]
pub fn segment_hit(p0: Vec3, p1: Vec3, base: Vec3) -> Option<(f32, HitRegion)> {
    let head = segment_enter_t(p0, p1, &head_box(base));
    let body = segment_enter_t(p0, p1, &body_box(base));
    match (head, body) {
        (Some(th), Some(tb)) if th <= tb => Some((th, HitRegion::Head)),
        (_, Some(tb)) => Some((tb, HitRegion::Body)),
        (Some(th), None) => Some((th, HitRegion::Head)),
        (None, None) => None,
    }
}
