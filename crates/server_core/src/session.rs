//! Roster, message application, and the respawn/round timers.

use data_runtime::arena::ArenaCfg;
use data_runtime::ids::WeaponId;
use data_runtime::rules::MatchRules;
use glam::Vec3;
use log::{info, warn};
use net_core::message::{Msg, RosterEntry};
use sim_core::arena;
use sim_core::combat::{CombatState, DamageOutcome, Scoreboard};
use sim_core::types::{PlayerId, Team};

/// Who a relayed message goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    All,
    /// Everyone but the original sender.
    Except(PlayerId),
    Only(PlayerId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outgoing {
    pub to: Audience,
    pub msg: Msg,
}

#[derive(Debug, Clone)]
struct SessionPlayer {
    id: PlayerId,
    name: String,
    team: Team,
    pos: Vec3,
    yaw: f32,
    pitch: f32,
    weapon: WeaponId,
    combat: CombatState,
}

/// All relay state for one match. No hidden statics: the hosting process
/// owns exactly one of these and passes it to every operation.
pub struct ServerState {
    arena: ArenaCfg,
    rules: MatchRules,
    next_id: u32,
    players: Vec<SessionPlayer>,
    scores: Scoreboard,
    pending_respawns: Vec<(PlayerId, u64)>,
    pending_reset: Option<u64>,
}

impl ServerState {
    #[must_use]
    pub fn new(arena: ArenaCfg, rules: MatchRules) -> Self {
        Self {
            arena,
            rules,
            next_id: 1,
            players: Vec::new(),
            scores: Scoreboard::new(rules.round_score_limit),
            pending_respawns: Vec::new(),
            pending_reset: None,
        }
    }

    /// Reserve a session id for a new connection. The roster row appears
    /// when the `Join` message arrives.
    pub fn connect(&mut self) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    #[must_use]
    pub fn roster_len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (self.scores.red, self.scores.blue)
    }

    #[must_use]
    pub fn player_hp(&self, id: PlayerId) -> Option<i32> {
        self.find(id).map(|p| p.combat.hp)
    }

    fn find(&self, id: PlayerId) -> Option<&SessionPlayer> {
        self.players.iter().find(|p| p.id == id)
    }

    fn find_mut(&mut self, id: PlayerId) -> Option<&mut SessionPlayer> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    fn roster_entry(p: &SessionPlayer) -> RosterEntry {
        RosterEntry {
            id: p.id.0,
            name: p.name.clone(),
            team: p.team.index(),
            pos: p.pos.to_array(),
            hp: p.combat.hp,
            alive: p.combat.alive,
            weapon: p.weapon.0,
        }
    }

    /// Apply one client message and append the resulting relays to `out`.
    pub fn handle(&mut self, from: PlayerId, msg: Msg, now_ms: u64, out: &mut Vec<Outgoing>) {
        metrics::counter!("relay.msgs_total").increment(1);
        match msg {
            Msg::Join { team, name } => self.join(from, team, &name, out),
            Msg::Move {
                pos, yaw, pitch, weapon, ..
            } => {
                // Positions are relayed untouched; the id is always the
                // session's, whatever the payload claimed.
                if let Some(p) = self.find_mut(from) {
                    p.pos = Vec3::from_array(pos);
                    p.yaw = yaw;
                    p.pitch = pitch;
                    p.weapon = WeaponId(weapon);
                    out.push(Outgoing {
                        to: Audience::Except(from),
                        msg: Msg::Move {
                            id: from.0,
                            pos,
                            yaw,
                            pitch,
                            weapon,
                        },
                    });
                }
            }
            Msg::Fire {
                origin, vel, weapon, ..
            } => {
                if self.find(from).is_some() {
                    out.push(Outgoing {
                        to: Audience::Except(from),
                        msg: Msg::Fire {
                            id: from.0,
                            origin,
                            vel,
                            weapon,
                        },
                    });
                }
            }
            Msg::DamageReport { victim, amount } => {
                self.apply_damage(from, PlayerId(victim), amount, now_ms, out);
            }
            other => {
                warn!("dropping unexpected client message from {from}: {other:?}");
            }
        }
    }

    fn join(&mut self, id: PlayerId, team: u8, name: &str, out: &mut Vec<Outgoing>) {
        let team = Team::from_index(team).unwrap_or(Team::Red);
        let pos = arena::spawn_point(&self.arena, team);
        let player = SessionPlayer {
            id,
            name: name.to_string(),
            team,
            pos,
            yaw: 0.0,
            pitch: 0.0,
            weapon: WeaponId(2),
            combat: CombatState::default(),
        };
        let entry = Self::roster_entry(&player);
        // Roster snapshot includes the joiner.
        self.players.push(player);
        let roster = self.players.iter().map(Self::roster_entry).collect();
        out.push(Outgoing {
            to: Audience::Only(id),
            msg: Msg::Welcome { id: id.0, roster },
        });
        out.push(Outgoing {
            to: Audience::Except(id),
            msg: Msg::PlayerJoined { entry },
        });
        metrics::counter!("relay.joins_total").increment(1);
        info!("{id} joined team {team} as {name:?}");
    }

    /// The trusting path: amounts and victims are accepted as reported.
    /// Reports naming a missing victim, or sent by a departed attacker,
    /// drop silently; disconnect races are expected.
    fn apply_damage(
        &mut self,
        attacker: PlayerId,
        victim: PlayerId,
        amount: i32,
        now_ms: u64,
        out: &mut Vec<Outgoing>,
    ) {
        let Some(attacker_team) = self.find(attacker).map(|p| p.team) else {
            return;
        };
        let Some(v) = self.find_mut(victim) else {
            return;
        };
        match v.combat.apply_damage(amount) {
            DamageOutcome::Ignored => {}
            DamageOutcome::Damaged => {
                out.push(Outgoing {
                    to: Audience::All,
                    msg: Msg::HpUpdate {
                        id: victim.0,
                        hp: v.combat.hp,
                    },
                });
            }
            DamageOutcome::Killed => {
                out.push(Outgoing {
                    to: Audience::All,
                    msg: Msg::HpUpdate { id: victim.0, hp: 0 },
                });
                out.push(Outgoing {
                    to: Audience::All,
                    msg: Msg::PlayerDied {
                        id: victim.0,
                        killer: attacker.0,
                        killer_team: attacker_team.index(),
                    },
                });
                self.pending_respawns
                    .push((victim, now_ms + self.rules.respawn_delay_ms));
                metrics::counter!("relay.kills_total").increment(1);
                info!("{victim} killed by {attacker}");
                let winner = self.scores.record_kill(attacker_team);
                out.push(Outgoing {
                    to: Audience::All,
                    msg: Msg::ScoreUpdate {
                        red: self.scores.red,
                        blue: self.scores.blue,
                    },
                });
                if let Some(team) = winner {
                    info!("round over, {team} wins");
                    out.push(Outgoing {
                        to: Audience::All,
                        msg: Msg::RoundOver {
                            team: team.index(),
                        },
                    });
                    self.pending_reset = Some(now_ms + self.rules.score_reset_delay_ms);
                }
            }
        }
    }

    /// Run the respawn and score-reset timers up to `now_ms`.
    pub fn tick(&mut self, now_ms: u64, out: &mut Vec<Outgoing>) {
        let due: Vec<PlayerId> = self
            .pending_respawns
            .iter()
            .filter(|(_, at)| *at <= now_ms)
            .map(|(id, _)| *id)
            .collect();
        self.pending_respawns.retain(|(_, at)| *at > now_ms);
        for id in due {
            // The player may have disconnected while dead.
            let Some(spawn) = self
                .find(id)
                .map(|p| arena::spawn_point(&self.arena, p.team))
            else {
                continue;
            };
            let Some(p) = self.find_mut(id) else { continue };
            if p.combat.respawn() {
                p.pos = spawn;
                out.push(Outgoing {
                    to: Audience::All,
                    msg: Msg::PlayerRespawn {
                        id: id.0,
                        pos: spawn.to_array(),
                    },
                });
            }
        }
        if let Some(at) = self.pending_reset
            && at <= now_ms
        {
            self.pending_reset = None;
            self.scores.reset();
            out.push(Outgoing {
                to: Audience::All,
                msg: Msg::ScoreUpdate { red: 0, blue: 0 },
            });
        }
    }

    /// Remove a departed player and tell the room.
    pub fn disconnect(&mut self, id: PlayerId, out: &mut Vec<Outgoing>) {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.pending_respawns.retain(|(pid, _)| *pid != id);
        if self.players.len() != before {
            info!("{id} disconnected");
            out.push(Outgoing {
                to: Audience::All,
                msg: Msg::PlayerLeft { id: id.0 },
            });
        }
    }
}
