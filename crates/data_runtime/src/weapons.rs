//! Weapon catalog loaded from data/config/weapons.toml.

use crate::ids::WeaponId;
use anyhow::{Context, Result};
use serde::Deserialize;

/// How the fire input maps to dispatch attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    /// Holding the input re-attempts every tick; the cooldown throttles.
    Automatic,
    /// One dispatch per press; the input must be released and re-pressed.
    SemiAutomatic,
}

/// What a successful dispatch does.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// Spawns one finite-speed projectile resolved by ray-segment testing.
    Projectile { speed: f32, life_s: f32 },
    /// Instant ray of fixed reach; damages the nearest intersected player.
    Melee { range: f32 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeaponDef {
    pub id: WeaponId,
    pub name: String,
    pub damage_body: i32,
    pub damage_head: i32,
    pub fire_rate_ms: u64,
    pub trigger: Trigger,
    pub kind: WeaponKind,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeaponCatalog {
    #[serde(rename = "weapon")]
    pub weapons: Vec<WeaponDef>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("weapon catalog is empty")]
    Empty,
    #[error("duplicate weapon id {0}")]
    DuplicateId(u16),
    #[error("weapon {0} has zero fire rate")]
    ZeroFireRate(u16),
    #[error("weapon {0} has non-positive speed/range")]
    BadReach(u16),
}

impl WeaponCatalog {
    pub fn load_default() -> Result<Self> {
        let path = crate::data_root().join("config/weapons.toml");
        let cat = if path.is_file() {
            let txt = std::fs::read_to_string(&path)
                .with_context(|| format!("read {}", path.display()))?;
            toml::from_str::<Self>(&txt).context("parse weapons TOML")?
        } else {
            Self::reference()
        };
        cat.validate()
            .with_context(|| format!("validate {}", path.display()))?;
        Ok(cat)
    }

    /// The reference loadout: sniper, AK-47, knife.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            weapons: vec![
                WeaponDef {
                    id: WeaponId(1),
                    name: "SNIPER".into(),
                    damage_body: 100,
                    damage_head: 200,
                    fire_rate_ms: 1500,
                    trigger: Trigger::SemiAutomatic,
                    kind: WeaponKind::Projectile {
                        speed: 240.0,
                        life_s: 1.0,
                    },
                },
                WeaponDef {
                    id: WeaponId(2),
                    name: "AK-47".into(),
                    damage_body: 20,
                    damage_head: 40,
                    fire_rate_ms: 100,
                    trigger: Trigger::Automatic,
                    kind: WeaponKind::Projectile {
                        speed: 240.0,
                        life_s: 1.0,
                    },
                },
                WeaponDef {
                    id: WeaponId(5),
                    name: "KNIFE".into(),
                    damage_body: 50,
                    damage_head: 50,
                    fire_rate_ms: 500,
                    trigger: Trigger::SemiAutomatic,
                    kind: WeaponKind::Melee { range: 3.0 },
                },
            ],
        }
    }

    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        if self.weapons.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, w) in self.weapons.iter().enumerate() {
            if self.weapons[..i].iter().any(|o| o.id == w.id) {
                return Err(CatalogError::DuplicateId(w.id.0));
            }
            if w.fire_rate_ms == 0 {
                return Err(CatalogError::ZeroFireRate(w.id.0));
            }
            let reach_ok = match w.kind {
                WeaponKind::Projectile { speed, life_s } => speed > 0.0 && life_s > 0.0,
                WeaponKind::Melee { range } => range > 0.0,
            };
            if !reach_ok {
                return Err(CatalogError::BadReach(w.id.0));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: WeaponId) -> Option<&WeaponDef> {
        self.weapons.iter().find(|w| w.id == id)
    }

    /// Next catalog entry after `id`, wrapping; scroll-wheel cycling.
    #[must_use]
    pub fn next_after(&self, id: WeaponId) -> Option<WeaponId> {
        let i = self.weapons.iter().position(|w| w.id == id)?;
        Some(self.weapons[(i + 1) % self.weapons.len()].id)
    }

    /// Previous catalog entry before `id`, wrapping.
    #[must_use]
    pub fn prev_before(&self, id: WeaponId) -> Option<WeaponId> {
        let i = self.weapons.iter().position(|w| w.id == id)?;
        Some(self.weapons[(i + self.weapons.len() - 1) % self.weapons.len()].id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_is_valid() {
        let cat = WeaponCatalog::reference();
        assert!(cat.validate().is_ok());
        assert!(cat.get(WeaponId(2)).is_some());
        assert!(cat.get(WeaponId(3)).is_none());
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let cat = WeaponCatalog::reference();
        assert_eq!(cat.next_after(WeaponId(5)), Some(WeaponId(1)));
        assert_eq!(cat.prev_before(WeaponId(1)), Some(WeaponId(5)));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut cat = WeaponCatalog::reference();
        let dup = cat.weapons[0].clone();
        cat.weapons.push(dup);
        assert_eq!(cat.validate(), Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn toml_kind_shapes_parse() {
        let txt = r#"
            [[weapon]]
            id = 9
            name = "TEST"
            damage_body = 10
            damage_head = 20
            fire_rate_ms = 250
            trigger = "semi-automatic"
            [weapon.kind.melee]
            range = 2.0
        "#;
        let cat: WeaponCatalog = toml::from_str(txt).expect("parse");
        assert!(matches!(
            cat.weapons[0].kind,
            WeaponKind::Melee { range } if (range - 2.0).abs() < 1e-6
        ));
    }
}
