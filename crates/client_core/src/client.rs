//! The per-client game loop: local simulation in, messages out.

use crate::input::InputState;
use crate::mirror::{Mirrors, RemotePlayer};
use crate::mouselook;
use collision_static::StaticWorld;
use data_runtime::arena::ArenaCfg;
use data_runtime::ids::WeaponId;
use data_runtime::input::InputCfg;
use data_runtime::weapons::{WeaponCatalog, WeaponKind};
use glam::{Vec3, vec3};
use log::{debug, info};
use net_core::message::Msg;
use sim_core::arena;
use sim_core::body::{MoveIntent, MoveTuning, PlayerBody};
use sim_core::hitbox::HitRegion;
use sim_core::projectiles::ProjectileSet;
use sim_core::tick::TickLimiter;
use sim_core::types::{PlayerId, Team};
use sim_core::weapons::{self, WeaponController};

const TICK_RATE_HZ: u32 = 60;

/// One connected client: the locally simulated player plus mirrors of every
/// peer. Local state is mutated only by [`GameClient::tick`]; mirror state
/// only by [`GameClient::apply`]. That partition is what makes the loop
/// race-free without locks.
pub struct GameClient {
    pub id: Option<PlayerId>,
    pub name: String,
    pub team: Team,
    pub body: PlayerBody,
    pub hp: i32,
    /// Set by `PlayerDied`, cleared by our `PlayerRespawn`. While dead the
    /// client publishes nothing and simulates nothing.
    pub dead: bool,
    pub mirrors: Mirrors,
    pub scores: (u32, u32),
    pub last_round_winner: Option<Team>,
    catalog: WeaponCatalog,
    tuning: MoveTuning,
    mouse: data_runtime::input::MouseCfg,
    world: StaticWorld,
    spawn: Vec3,
    weapons: WeaponController,
    projectiles: ProjectileSet,
    limiter: TickLimiter,
}

impl GameClient {
    #[must_use]
    pub fn new(
        name: &str,
        team: Team,
        catalog: WeaponCatalog,
        arena_cfg: &ArenaCfg,
        input_cfg: &InputCfg,
    ) -> Self {
        let spawn = arena::spawn_point(arena_cfg, team);
        // New players start on the rifle, not the first catalog slot.
        let initial = catalog
            .get(WeaponId(2))
            .map_or_else(|| catalog.weapons[0].id, |w| w.id);
        Self {
            id: None,
            name: name.to_string(),
            team,
            body: PlayerBody::at(spawn),
            hp: 100,
            dead: false,
            mirrors: Mirrors::default(),
            scores: (0, 0),
            last_round_winner: None,
            catalog,
            tuning: MoveTuning::from_cfg(&input_cfg.movement),
            mouse: input_cfg.mouse,
            world: arena::build_world(arena_cfg),
            spawn,
            weapons: WeaponController::new(initial),
            projectiles: ProjectileSet::default(),
            limiter: TickLimiter::new(TICK_RATE_HZ),
        }
    }

    /// The registration message to send once the transport is up.
    #[must_use]
    pub fn join_msg(&self) -> Msg {
        Msg::Join {
            team: self.team.index(),
            name: self.name.clone(),
        }
    }

    #[must_use]
    pub fn equipped(&self) -> WeaponId {
        self.weapons.equipped
    }

    #[must_use]
    pub fn live_projectiles(&self) -> usize {
        self.projectiles.len()
    }

    /// One simulation tick. Appends this tick's outbound messages to `out`;
    /// a skipped tick (rate limiter) or a dead/unjoined player appends
    /// nothing.
    pub fn tick(&mut self, now_ms: u64, input: &InputState, out: &mut Vec<Msg>) {
        let Some(dt) = self.limiter.tick(now_ms) else {
            return;
        };
        let Some(id) = self.id else {
            return;
        };
        if self.dead {
            return;
        }

        mouselook::apply_mouse_delta(&self.mouse, &mut self.body, input.mouse_dx, input.mouse_dy);

        let intent = MoveIntent {
            forward: input.forward,
            backward: input.backward,
            strafe_left: input.strafe_left,
            strafe_right: input.strafe_right,
            jump: input.jump,
        };
        self.body.step(&intent, &self.tuning, &self.world, dt);

        if let Some(sel) = input.select_weapon {
            self.weapons.select(sel, &self.catalog);
        }
        match input.cycle_weapon {
            1.. => self.weapons.cycle(&self.catalog, true),
            ..=-1 => self.weapons.cycle(&self.catalog, false),
            0 => {}
        }

        if !input.fire {
            self.weapons.release_trigger();
        }
        let targets = self.mirrors.alive_targets();
        if input.fire
            && let Some(weapon) = self.weapons.try_fire(now_ms, &self.catalog)
        {
            let dir = weapons::aim_dir(self.body.yaw, self.body.pitch);
            match weapon.kind {
                WeaponKind::Melee { range } => {
                    if let Some(victim) = weapons::melee_target(self.body.pos, dir, range, &targets)
                    {
                        debug!("melee hit on {victim}");
                        out.push(Msg::DamageReport {
                            victim: victim.0,
                            amount: weapon.damage_body,
                        });
                    }
                }
                WeaponKind::Projectile { .. } => {
                    let origin = self.body.pos + vec3(0.0, self.tuning.eye_height, 0.0);
                    if let Some(p) = self.projectiles.spawn_local(id, origin, dir, weapon) {
                        out.push(Msg::Fire {
                            id: id.0,
                            origin: p.pos.to_array(),
                            vel: p.vel.to_array(),
                            weapon: weapon.id.0,
                        });
                    }
                }
            }
        }

        for hit in self.projectiles.advance(dt, &self.world, &targets) {
            let amount = self.catalog.get(hit.weapon).map_or(0, |w| match hit.region {
                HitRegion::Head => w.damage_head,
                HitRegion::Body => w.damage_body,
            });
            if amount > 0 {
                out.push(Msg::DamageReport {
                    victim: hit.victim.0,
                    amount,
                });
            }
        }

        out.push(Msg::Move {
            id: id.0,
            pos: self.body.pos.to_array(),
            yaw: self.body.yaw,
            pitch: self.body.pitch,
            weapon: self.weapons.equipped.0,
        });
    }

    /// Apply one inbound broadcast to mirror or own state. Messages naming
    /// unknown players are dropped silently; disconnect races are expected.
    pub fn apply(&mut self, msg: &Msg) {
        match msg {
            Msg::Welcome { id, roster } => {
                let own = PlayerId(*id);
                self.id = Some(own);
                for entry in roster {
                    if entry.id != own.0 {
                        self.mirrors.insert(RemotePlayer::from_roster(entry));
                    }
                }
                info!(
                    "{}: joined as {own} with {} peers",
                    self.name,
                    self.mirrors.len()
                );
            }
            Msg::PlayerJoined { entry } => {
                if self.id != Some(PlayerId(entry.id)) {
                    self.mirrors.insert(RemotePlayer::from_roster(entry));
                }
            }
            Msg::Move {
                id,
                pos,
                yaw,
                pitch,
                weapon,
            } => {
                if self.id != Some(PlayerId(*id)) {
                    self.mirrors.apply_move(
                        PlayerId(*id),
                        Vec3::from_array(*pos),
                        *yaw,
                        *pitch,
                        WeaponId(*weapon),
                    );
                }
            }
            Msg::Fire {
                id,
                origin,
                vel,
                weapon,
            } => {
                if self.id != Some(PlayerId(*id)) {
                    self.projectiles.spawn_remote(
                        PlayerId(*id),
                        Vec3::from_array(*origin),
                        Vec3::from_array(*vel),
                        WeaponId(*weapon),
                        self.catalog.get(WeaponId(*weapon)),
                    );
                }
            }
            Msg::HpUpdate { id, hp } => {
                if self.id == Some(PlayerId(*id)) {
                    self.hp = *hp;
                } else if let Some(p) = self.mirrors.get_mut(PlayerId(*id)) {
                    p.hp = *hp;
                }
            }
            Msg::PlayerDied { id, .. } => {
                if self.id == Some(PlayerId(*id)) {
                    self.dead = true;
                } else if let Some(p) = self.mirrors.get_mut(PlayerId(*id)) {
                    p.alive = false;
                }
            }
            Msg::PlayerRespawn { id, pos } => {
                if self.id == Some(PlayerId(*id)) {
                    // Idempotent: a replay re-applies the same values.
                    self.dead = false;
                    self.hp = 100;
                    self.body.pos = Vec3::from_array(*pos);
                    self.body.vel_y = 0.0;
                } else if let Some(p) = self.mirrors.get_mut(PlayerId(*id)) {
                    p.alive = true;
                    p.hp = 100;
                    p.pos = Vec3::from_array(*pos);
                }
            }
            Msg::PlayerLeft { id } => {
                if self.mirrors.remove(PlayerId(*id)) {
                    debug!("{}: peer {id} left", self.name);
                }
            }
            Msg::ScoreUpdate { red, blue } => {
                self.scores = (*red, *blue);
            }
            Msg::RoundOver { team } => {
                self.last_round_winner = Team::from_index(*team);
            }
            // Client-originated kinds reaching a client are relay bugs; drop.
            Msg::Join { .. } | Msg::DamageReport { .. } => {}
        }
    }

    /// Team spawn of this client, useful for assertions and respawn checks.
    #[must_use]
    pub fn spawn_point(&self) -> Vec3 {
        self.spawn
    }
}
