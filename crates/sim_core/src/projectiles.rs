//! In-flight projectile set: advance, ray-segment collision, lifetime expiry.

use crate::hitbox::{self, HitRegion};
use crate::types::PlayerId;
use collision_static::StaticWorld;
use data_runtime::ids::WeaponId;
use data_runtime::weapons::{WeaponDef, WeaponKind};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub id: u32,
    pub owner: PlayerId,
    pub pos: Vec3,
    pub vel: Vec3,
    pub weapon: WeaponId,
    pub life_s: f32,
    /// Fired by this simulation's own player. Remote echoes are visual
    /// mirrors only and never produce damage here, so a hit is counted on
    /// exactly one peer.
    pub local: bool,
}

/// A locally owned projectile's first intersection this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub owner: PlayerId,
    pub victim: PlayerId,
    pub weapon: WeaponId,
    pub region: HitRegion,
}

/// All live projectiles of one client simulation, in creation order.
#[derive(Debug, Default)]
pub struct ProjectileSet {
    next_id: u32,
    live: Vec<Projectile>,
}

impl ProjectileSet {
    /// Spawn from the local player's weapon. Returns the spawned projectile
    /// so the caller can announce it to peers; `None` for melee weapons or a
    /// degenerate aim direction.
    pub fn spawn_local(
        &mut self,
        owner: PlayerId,
        origin: Vec3,
        dir: Vec3,
        weapon: &WeaponDef,
    ) -> Option<Projectile> {
        let WeaponKind::Projectile { speed, life_s } = weapon.kind else {
            return None;
        };
        let dir = dir.normalize_or_zero();
        if dir.length_squared() <= 1e-6 {
            return None;
        }
        Some(self.push(owner, origin, dir * speed, weapon.id, life_s, true))
    }

    /// Mirror a peer's announced projectile. Lifetime comes from the weapon
    /// definition when known, else a one-second fallback.
    pub fn spawn_remote(
        &mut self,
        owner: PlayerId,
        origin: Vec3,
        vel: Vec3,
        weapon: WeaponId,
        def: Option<&WeaponDef>,
    ) {
        let life_s = match def.map(|d| d.kind) {
            Some(WeaponKind::Projectile { life_s, .. }) => life_s,
            _ => 1.0,
        };
        self.push(owner, origin, vel, weapon, life_s, false);
    }

    fn push(
        &mut self,
        owner: PlayerId,
        pos: Vec3,
        vel: Vec3,
        weapon: WeaponId,
        life_s: f32,
        local: bool,
    ) -> Projectile {
        let p = Projectile {
            id: self.next_id,
            owner,
            pos,
            vel,
            weapon,
            life_s,
            local,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(p);
        p
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter()
    }

    /// Advance every projectile by `dt` and resolve this tick's segment
    /// against terrain and the given alive players. Terrain and player
    /// candidates compete by ray parameter; an exact tie is absorbed by
    /// terrain. Each returned hit destroys its projectile, so one projectile
    /// damages at most one victim, exactly once.
    pub fn advance(
        &mut self,
        dt: f32,
        world: &StaticWorld,
        targets: &[(PlayerId, Vec3)],
    ) -> SmallVec<[ProjectileHit; 4]> {
        let mut hits = SmallVec::new();
        self.live.retain_mut(|p| {
            let p0 = p.pos;
            p.pos += p.vel * dt;
            p.life_s -= dt;

            let terrain_t = world.segment_enter_obstacle(p0, p.pos);
            let mut player_t: Option<(f32, PlayerId, HitRegion)> = None;
            if p.local {
                for (id, base) in targets {
                    if *id == p.owner {
                        continue;
                    }
                    if let Some((t, region)) = hitbox::segment_hit(p0, p.pos, *base)
                        && player_t.is_none_or(|(best, _, _)| t < best)
                    {
                        player_t = Some((t, *id, region));
                    }
                }
            }

            match (terrain_t, player_t) {
                (Some(tt), Some((tp, victim, region))) if tp < tt => {
                    hits.push(ProjectileHit {
                        owner: p.owner,
                        victim,
                        weapon: p.weapon,
                        region,
                    });
                    false
                }
                (Some(_), _) => false,
                (None, Some((_, victim, region))) => {
                    hits.push(ProjectileHit {
                        owner: p.owner,
                        victim,
                        weapon: p.weapon,
                        region,
                    });
                    false
                }
                (None, None) => p.life_s > 0.0,
            }
        });
        hits
    }
}
