//! collision_static: axis-aligned arena volumes + overlap and segment-enter queries.

use glam::Vec3;

/// Axis-aligned box, the only collision shape in the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive overlap test; touching faces count as overlapping.
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }

    #[must_use]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    #[must_use]
    pub fn expanded(&self, pad: Vec3) -> Self {
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}

/// Entry parameter of the segment `p0 -> p1` into `b` (slab method).
///
/// Returns `Some(t)` with `t` in `[0, 1]` when the segment reaches the box
/// this step; `t = 0` when `p0` already starts inside. `None` when the
/// segment stays clear.
#[must_use]
pub fn segment_enter_t(p0: Vec3, p1: Vec3, b: &Aabb) -> Option<f32> {
    let d = p1 - p0;
    let mut tmin = 0.0f32;
    let mut tmax = 1.0f32;
    for i in 0..3 {
        let s = p0[i];
        let dir = d[i];
        if dir.abs() < 1e-6 {
            if s < b.min[i] || s > b.max[i] {
                return None;
            }
        } else {
            let inv = 1.0 / dir;
            let mut t0 = (b.min[i] - s) * inv;
            let mut t1 = (b.max[i] - s) * inv;
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }
            tmin = tmin.max(t0);
            tmax = tmax.min(t1);
            if tmin > tmax {
                return None;
            }
        }
    }
    Some(tmin)
}

/// Static obstacle and climb volumes, built once at map load.
#[derive(Clone, Debug, Default)]
pub struct StaticWorld {
    pub obstacles: Vec<Aabb>,
    pub climbs: Vec<Aabb>,
}

impl StaticWorld {
    #[must_use]
    pub fn new(obstacles: Vec<Aabb>, climbs: Vec<Aabb>) -> Self {
        Self { obstacles, climbs }
    }

    /// True when `q` overlaps any obstacle volume.
    #[must_use]
    pub fn overlaps_obstacle(&self, q: &Aabb) -> bool {
        self.obstacles.iter().any(|o| o.intersects(q))
    }

    /// True when `q` overlaps any climb volume.
    #[must_use]
    pub fn overlaps_climb(&self, q: &Aabb) -> bool {
        self.climbs.iter().any(|c| c.intersects(q))
    }

    /// Smallest entry parameter of the segment into any obstacle.
    #[must_use]
    pub fn segment_enter_obstacle(&self, p0: Vec3, p1: Vec3) -> Option<f32> {
        let mut best: Option<f32> = None;
        for o in &self.obstacles {
            if let Some(t) = segment_enter_t(p0, p1, o)
                && best.is_none_or(|b| t < b)
            {
                best = Some(t);
            }
        }
        best
    }
}
