//! The synchronization message taxonomy.
//!
//! One enum covers both directions; the relay decides what to rebroadcast.
//! Continuous state (`Move`) is sent once per tick and applied as an
//! idempotent overwrite; everything else is a discrete event. A leading kind
//! byte tags each payload.

use crate::wire::{
    WireDecode, WireEncode, get_f32, get_i32, get_str, get_u8, get_u16, get_u32, get_vec3,
    put_str, put_vec3,
};
use anyhow::{Result, bail};

/// Roster row carried by `Welcome` and `PlayerJoined`.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub team: u8,
    pub pos: [f32; 3],
    pub hp: i32,
    pub alive: bool,
    pub weapon: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// C->S: register on a team.
    Join { team: u8, name: String },
    /// S->C: assigned id plus the full current roster.
    Welcome { id: u32, roster: Vec<RosterEntry> },
    /// S->C broadcast: a new roster row.
    PlayerJoined { entry: RosterEntry },
    /// Per-tick position sync, relayed to everyone but the sender.
    Move {
        id: u32,
        pos: [f32; 3],
        yaw: f32,
        pitch: f32,
        weapon: u16,
    },
    /// A projectile left the sender's muzzle; peers spawn a mirror of it.
    Fire {
        id: u32,
        origin: [f32; 3],
        vel: [f32; 3],
        weapon: u16,
    },
    /// C->S: client-computed hit report. The relay trusts it as-is.
    DamageReport { victim: u32, amount: i32 },
    /// S->C broadcast after a damage report is applied.
    HpUpdate { id: u32, hp: i32 },
    PlayerDied {
        id: u32,
        killer: u32,
        killer_team: u8,
    },
    PlayerRespawn { id: u32, pos: [f32; 3] },
    PlayerLeft { id: u32 },
    ScoreUpdate { red: u32, blue: u32 },
    RoundOver { team: u8 },
}

const K_JOIN: u8 = 0;
const K_WELCOME: u8 = 1;
const K_PLAYER_JOINED: u8 = 2;
const K_MOVE: u8 = 3;
const K_FIRE: u8 = 4;
const K_DAMAGE_REPORT: u8 = 5;
const K_HP_UPDATE: u8 = 6;
const K_PLAYER_DIED: u8 = 7;
const K_PLAYER_RESPAWN: u8 = 8;
const K_PLAYER_LEFT: u8 = 9;
const K_SCORE_UPDATE: u8 = 10;
const K_ROUND_OVER: u8 = 11;

impl WireEncode for RosterEntry {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.id.to_le_bytes());
        put_str(out, &self.name);
        out.push(self.team);
        put_vec3(out, self.pos);
        out.extend_from_slice(&self.hp.to_le_bytes());
        out.push(u8::from(self.alive));
        out.extend_from_slice(&self.weapon.to_le_bytes());
    }
}

impl WireDecode for RosterEntry {
    fn decode(inp: &mut &[u8]) -> Result<Self> {
        Ok(Self {
            id: get_u32(inp)?,
            name: get_str(inp)?,
            team: get_u8(inp)?,
            pos: get_vec3(inp)?,
            hp: get_i32(inp)?,
            alive: get_u8(inp)? != 0,
            weapon: get_u16(inp)?,
        })
    }
}

impl WireEncode for Msg {
    fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Self::Join { team, name } => {
                out.push(K_JOIN);
                out.push(*team);
                put_str(out, name);
            }
            Self::Welcome { id, roster } => {
                out.push(K_WELCOME);
                out.extend_from_slice(&id.to_le_bytes());
                let n = u16::try_from(roster.len()).unwrap_or(u16::MAX);
                out.extend_from_slice(&n.to_le_bytes());
                for entry in roster.iter().take(n as usize) {
                    entry.encode(out);
                }
            }
            Self::PlayerJoined { entry } => {
                out.push(K_PLAYER_JOINED);
                entry.encode(out);
            }
            Self::Move {
                id,
                pos,
                yaw,
                pitch,
                weapon,
            } => {
                out.push(K_MOVE);
                out.extend_from_slice(&id.to_le_bytes());
                put_vec3(out, *pos);
                out.extend_from_slice(&yaw.to_le_bytes());
                out.extend_from_slice(&pitch.to_le_bytes());
                out.extend_from_slice(&weapon.to_le_bytes());
            }
            Self::Fire {
                id,
                origin,
                vel,
                weapon,
            } => {
                out.push(K_FIRE);
                out.extend_from_slice(&id.to_le_bytes());
                put_vec3(out, *origin);
                put_vec3(out, *vel);
                out.extend_from_slice(&weapon.to_le_bytes());
            }
            Self::DamageReport { victim, amount } => {
                out.push(K_DAMAGE_REPORT);
                out.extend_from_slice(&victim.to_le_bytes());
                out.extend_from_slice(&amount.to_le_bytes());
            }
            Self::HpUpdate { id, hp } => {
                out.push(K_HP_UPDATE);
                out.extend_from_slice(&id.to_le_bytes());
                out.extend_from_slice(&hp.to_le_bytes());
            }
            Self::PlayerDied {
                id,
                killer,
                killer_team,
            } => {
                out.push(K_PLAYER_DIED);
                out.extend_from_slice(&id.to_le_bytes());
                out.extend_from_slice(&killer.to_le_bytes());
                out.push(*killer_team);
            }
            Self::PlayerRespawn { id, pos } => {
                out.push(K_PLAYER_RESPAWN);
                out.extend_from_slice(&id.to_le_bytes());
                put_vec3(out, *pos);
            }
            Self::PlayerLeft { id } => {
                out.push(K_PLAYER_LEFT);
                out.extend_from_slice(&id.to_le_bytes());
            }
            Self::ScoreUpdate { red, blue } => {
                out.push(K_SCORE_UPDATE);
                out.extend_from_slice(&red.to_le_bytes());
                out.extend_from_slice(&blue.to_le_bytes());
            }
            Self::RoundOver { team } => {
                out.push(K_ROUND_OVER);
                out.push(*team);
            }
        }
    }
}

impl WireDecode for Msg {
    fn decode(inp: &mut &[u8]) -> Result<Self> {
        let kind = get_u8(inp)?;
        Ok(match kind {
            K_JOIN => Self::Join {
                team: get_u8(inp)?,
                name: get_str(inp)?,
            },
            K_WELCOME => {
                let id = get_u32(inp)?;
                let n = get_u16(inp)? as usize;
                let mut roster = Vec::with_capacity(n.min(256));
                for _ in 0..n {
                    roster.push(RosterEntry::decode(inp)?);
                }
                Self::Welcome { id, roster }
            }
            K_PLAYER_JOINED => Self::PlayerJoined {
                entry: RosterEntry::decode(inp)?,
            },
            K_MOVE => Self::Move {
                id: get_u32(inp)?,
                pos: get_vec3(inp)?,
                yaw: get_f32(inp)?,
                pitch: get_f32(inp)?,
                weapon: get_u16(inp)?,
            },
            K_FIRE => Self::Fire {
                id: get_u32(inp)?,
                origin: get_vec3(inp)?,
                vel: get_vec3(inp)?,
                weapon: get_u16(inp)?,
            },
            K_DAMAGE_REPORT => Self::DamageReport {
                victim: get_u32(inp)?,
                amount: get_i32(inp)?,
            },
            K_HP_UPDATE => Self::HpUpdate {
                id: get_u32(inp)?,
                hp: get_i32(inp)?,
            },
            K_PLAYER_DIED => Self::PlayerDied {
                id: get_u32(inp)?,
                killer: get_u32(inp)?,
                killer_team: get_u8(inp)?,
            },
            K_PLAYER_RESPAWN => Self::PlayerRespawn {
                id: get_u32(inp)?,
                pos: get_vec3(inp)?,
            },
            K_PLAYER_LEFT => Self::PlayerLeft { id: get_u32(inp)? },
            K_SCORE_UPDATE => Self::ScoreUpdate {
                red: get_u32(inp)?,
                blue: get_u32(inp)?,
            },
            K_ROUND_OVER => Self::RoundOver { team: get_u8(inp)? },
            other => bail!("unknown message kind {other}"),
        })
    }
}

impl Msg {
    /// Encode into a fresh buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }
}
