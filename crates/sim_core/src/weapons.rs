//! Per-player firing state machine and aim helpers.

use crate::hitbox;
use crate::types::PlayerId;
use data_runtime::ids::WeaponId;
use data_runtime::weapons::{Trigger, WeaponCatalog, WeaponDef};
use glam::Vec3;

/// Cooldown gate plus semi-automatic trigger latch.
///
/// One last-fire timestamp is kept per player, not per weapon: switching
/// weapons never resets or shortens the window, and the duration consulted
/// is the currently equipped weapon's rate.
#[derive(Debug, Clone, Copy)]
pub struct WeaponController {
    pub equipped: WeaponId,
    last_fire_ms: Option<u64>,
    trigger_latched: bool,
}

impl WeaponController {
    #[must_use]
    pub fn new(initial: WeaponId) -> Self {
        Self {
            equipped: initial,
            last_fire_ms: None,
            trigger_latched: false,
        }
    }

    /// Direct numeric selection; unknown ids are ignored.
    pub fn select(&mut self, id: WeaponId, catalog: &WeaponCatalog) {
        if catalog.get(id).is_some() {
            self.equipped = id;
        }
    }

    /// Scroll-wheel cycling through the catalog, wrapping at both ends.
    pub fn cycle(&mut self, catalog: &WeaponCatalog, forward: bool) {
        let next = if forward {
            catalog.next_after(self.equipped)
        } else {
            catalog.prev_before(self.equipped)
        };
        if let Some(id) = next {
            self.equipped = id;
        }
    }

    /// Clears the semi-automatic latch; call when the fire input is released.
    pub fn release_trigger(&mut self) {
        self.trigger_latched = false;
    }

    /// Attempt a dispatch at `now_ms`. A rejected attempt (cooldown or
    /// latched trigger) is a silent no-op, not an error.
    pub fn try_fire<'a>(
        &mut self,
        now_ms: u64,
        catalog: &'a WeaponCatalog,
    ) -> Option<&'a WeaponDef> {
        let weapon = catalog.get(self.equipped)?;
        if self.trigger_latched {
            return None;
        }
        if let Some(last) = self.last_fire_ms
            && now_ms.saturating_sub(last) < weapon.fire_rate_ms
        {
            return None;
        }
        self.last_fire_ms = Some(now_ms);
        if weapon.trigger == Trigger::SemiAutomatic {
            self.trigger_latched = true;
        }
        Some(weapon)
    }
}

/// Unit aim direction from yaw and pitch; yaw zero looks down negative Z.
#[must_use]
pub fn aim_dir(yaw: f32, pitch: f32) -> Vec3 {
    Vec3::new(
        -yaw.sin() * pitch.cos(),
        pitch.sin(),
        -yaw.cos() * pitch.cos(),
    )
}

/// Nearest player whose hit volumes intersect the melee ray. The ray starts
/// at the attacker's base position, not at eye height.
#[must_use]
pub fn melee_target(
    origin: Vec3,
    dir: Vec3,
    range: f32,
    targets: &[(PlayerId, Vec3)],
) -> Option<PlayerId> {
    let p1 = origin + dir * range;
    let mut best: Option<(f32, PlayerId)> = None;
    for (id, base) in targets {
        if let Some((t, _)) = hitbox::segment_hit(origin, p1, *base)
            && best.is_none_or(|(bt, _)| t < bt)
        {
            best = Some((t, *id));
        }
    }
    best.map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::vec3;

    fn catalog() -> WeaponCatalog {
        WeaponCatalog::reference()
    }

    #[test]
    fn automatic_hold_fires_at_rate_intervals() {
        let cat = catalog();
        let mut c = WeaponController::new(WeaponId(2)); // AK-47, 100 ms
        let mut fired = Vec::new();
        for now in (0..1000).step_by(16) {
            if c.try_fire(now, &cat).is_some() {
                fired.push(now);
            }
        }
        assert!(fired.len() > 5);
        for pair in fired.windows(2) {
            assert!(pair[1] - pair[0] >= 100);
        }
    }

    #[test]
    fn semi_automatic_needs_trigger_release() {
        let cat = catalog();
        let mut c = WeaponController::new(WeaponId(1)); // sniper
        assert!(c.try_fire(0, &cat).is_some());
        // Held past the cooldown: still latched.
        assert!(c.try_fire(2000, &cat).is_none());
        c.release_trigger();
        assert!(c.try_fire(2000, &cat).is_some());
    }

    #[test]
    fn switching_weapons_keeps_the_cooldown_window() {
        let cat = catalog();
        let mut c = WeaponController::new(WeaponId(1));
        assert!(c.try_fire(0, &cat).is_some());
        c.release_trigger();
        c.select(WeaponId(2), &cat);
        // 50 ms after the sniper shot the AK's 100 ms window still blocks.
        assert!(c.try_fire(50, &cat).is_none());
        assert!(c.try_fire(100, &cat).is_some());
    }

    #[test]
    fn cycling_wraps_and_unknown_select_is_ignored() {
        let cat = catalog();
        let mut c = WeaponController::new(WeaponId(5));
        c.cycle(&cat, true);
        assert_eq!(c.equipped, WeaponId(1));
        c.select(WeaponId(42), &cat);
        assert_eq!(c.equipped, WeaponId(1));
    }

    #[test]
    fn aim_dir_matches_yaw_pitch_conventions() {
        let d = aim_dir(0.0, 0.0);
        assert_abs_diff_eq!(d.z, -1.0, epsilon = 1e-6);
        let up = aim_dir(0.0, std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(up.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn melee_picks_the_nearest_of_two_targets() {
        let targets = vec![
            (PlayerId(7), vec3(0.0, 0.0, -2.5)),
            (PlayerId(8), vec3(0.0, 0.0, -1.5)),
        ];
        let hit = melee_target(Vec3::ZERO, vec3(0.0, 0.0, -1.0), 3.0, &targets);
        assert_eq!(hit, Some(PlayerId(8)));
    }

    #[test]
    fn melee_out_of_range_misses() {
        let targets = vec![(PlayerId(7), vec3(0.0, 0.0, -5.0))];
        let hit = melee_target(Vec3::ZERO, vec3(0.0, 0.0, -1.0), 3.0, &targets);
        assert_eq!(hit, None);
    }
}
