#![allow(dead_code)]

use client_core::client::GameClient;
use data_runtime::arena::ArenaCfg;
use data_runtime::input::InputCfg;
use data_runtime::weapons::WeaponCatalog;
use net_core::message::{Msg, RosterEntry};
use sim_core::types::Team;

pub const TICK_MS: u64 = 16;

/// A red client joined as id 1 on the reference arena.
pub fn joined_client() -> GameClient {
    let mut c = GameClient::new(
        "local",
        Team::Red,
        WeaponCatalog::reference(),
        &ArenaCfg::default(),
        &InputCfg::default(),
    );
    c.apply(&Msg::Welcome {
        id: 1,
        roster: vec![],
    });
    c
}

/// Stand a blue peer (id 2) at `pos` via the join broadcast.
pub fn add_peer(c: &mut GameClient, id: u32, pos: [f32; 3]) {
    c.apply(&Msg::PlayerJoined {
        entry: RosterEntry {
            id,
            name: format!("peer-{id}"),
            team: 1,
            pos,
            hp: 100,
            alive: true,
            weapon: 2,
        },
    });
}
