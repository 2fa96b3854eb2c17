//! Remote-player mirror state, mutated only by inbound messages.
//!
//! Last message wins: every update is an idempotent overwrite, so loss and
//! reordering degrade smoothness, never correctness.

use data_runtime::ids::WeaponId;
use glam::Vec3;
use net_core::message::RosterEntry;
use sim_core::types::{PlayerId, Team};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct RemotePlayer {
    pub id: PlayerId,
    pub name: String,
    pub team: Team,
    pub pos: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub weapon: WeaponId,
    pub hp: i32,
    pub alive: bool,
}

impl RemotePlayer {
    #[must_use]
    pub fn from_roster(entry: &RosterEntry) -> Self {
        Self {
            id: PlayerId(entry.id),
            name: entry.name.clone(),
            team: Team::from_index(entry.team).unwrap_or(Team::Red),
            pos: Vec3::from_array(entry.pos),
            yaw: 0.0,
            pitch: 0.0,
            weapon: WeaponId(entry.weapon),
            hp: entry.hp,
            alive: entry.alive,
        }
    }
}

#[derive(Debug, Default)]
pub struct Mirrors {
    map: HashMap<PlayerId, RemotePlayer>,
}

impl Mirrors {
    pub fn insert(&mut self, p: RemotePlayer) {
        self.map.insert(p.id, p);
    }

    pub fn remove(&mut self, id: PlayerId) -> bool {
        self.map.remove(&id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&RemotePlayer> {
        self.map.get(&id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut RemotePlayer> {
        self.map.get_mut(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Apply a position overwrite, creating the mirror lazily on first
    /// sight.
    pub fn apply_move(&mut self, id: PlayerId, pos: Vec3, yaw: f32, pitch: f32, weapon: WeaponId) {
        let p = self.map.entry(id).or_insert_with(|| RemotePlayer {
            id,
            name: String::new(),
            team: Team::Red,
            pos,
            yaw,
            pitch,
            weapon,
            hp: 100,
            alive: true,
        });
        p.pos = pos;
        p.yaw = yaw;
        p.pitch = pitch;
        p.weapon = weapon;
    }

    /// Bases of every alive mirror, the hit-test target list.
    #[must_use]
    pub fn alive_targets(&self) -> Vec<(PlayerId, Vec3)> {
        self.map
            .values()
            .filter(|p| p.alive)
            .map(|p| (p.id, p.pos))
            .collect()
    }
}
