//! In-process match harness: N clients wired to the relay over loopback
//! pipes, driven by a synthetic millisecond clock.
//!
//! Each step drains inbound broadcasts into every client, runs one client
//! tick per seat, and pumps the hub once. Bots and tests poke the public
//! `input`/`client` fields between steps.

use anyhow::Result;
use client_core::client::GameClient;
use client_core::input::InputState;
use data_runtime::arena::ArenaCfg;
use data_runtime::input::InputCfg;
use data_runtime::rules::MatchRules;
use data_runtime::weapons::WeaponCatalog;
use log::warn;
use net_core::frame;
use net_core::message::Msg;
use net_core::transport::{LocalLoopbackTransport, Transport};
use net_core::wire::{WireDecode, WireEncode};
use server_core::ServerHub;
use sim_core::types::Team;

/// Wall-clock advance per [`LoopbackMatch::step`], one 60 Hz frame.
pub const STEP_MS: u64 = 16;

pub struct Seat {
    pub client: GameClient,
    pub input: InputState,
    transport: LocalLoopbackTransport,
}

pub struct LoopbackMatch {
    pub hub: ServerHub,
    pub seats: Vec<Seat>,
    now_ms: u64,
}

impl LoopbackMatch {
    /// Build a hub plus one seated client per roster entry, all on default
    /// data, and queue every client's registration message.
    pub fn new(roster: &[(&str, Team)]) -> Result<Self> {
        let catalog = WeaponCatalog::load_default()?;
        let arena = ArenaCfg::load_default()?;
        let rules = MatchRules::load_default()?;
        let input_cfg = InputCfg::load_default()?;
        let mut hub = ServerHub::new(arena.clone(), rules);
        let mut seats = Vec::with_capacity(roster.len());
        for &(name, team) in roster {
            let (client_end, server_end) = LocalLoopbackTransport::pair();
            hub.attach(Box::new(server_end));
            let client = GameClient::new(name, team, catalog.clone(), &arena, &input_cfg);
            send(&client_end, &client.join_msg())
                .map_err(|_| anyhow::anyhow!("relay pipe closed during setup"))?;
            seats.push(Seat {
                client,
                input: InputState::default(),
                transport: client_end,
            });
        }
        Ok(Self {
            hub,
            seats,
            now_ms: 0,
        })
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advance the clock one frame: inbound first so a fresh `Welcome` is
    /// visible to the same step's tick, then simulate, then pump the relay.
    pub fn step(&mut self) {
        self.now_ms += STEP_MS;
        let mut out = Vec::new();
        for seat in &mut self.seats {
            while let Some(bytes) = seat.transport.try_recv() {
                match frame::read_msg(&bytes).and_then(|mut payload| Msg::decode(&mut payload)) {
                    Ok(msg) => seat.client.apply(&msg),
                    Err(e) => warn!("{}: undecodable broadcast: {e}", seat.client.name),
                }
            }
            seat.client.tick(self.now_ms, &seat.input, &mut out);
            for msg in out.drain(..) {
                if send(&seat.transport, &msg).is_err() {
                    warn!("{}: relay gone, dropping outbound", seat.client.name);
                }
            }
            seat.input.clear_frame();
        }
        self.hub.pump(self.now_ms);
    }

    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }
}

fn send(
    transport: &LocalLoopbackTransport,
    msg: &Msg,
) -> std::result::Result<(), net_core::transport::TrySendError> {
    let mut payload = Vec::new();
    msg.encode(&mut payload);
    let mut framed = Vec::new();
    frame::write_msg(&mut framed, &payload);
    transport.try_send(framed)
}
