//! Transport-facing hub: decodes frames, feeds the session state, and fans
//! encoded broadcasts back out.

use crate::session::{Audience, Outgoing, ServerState};
use data_runtime::arena::ArenaCfg;
use data_runtime::rules::MatchRules;
use log::warn;
use net_core::frame;
use net_core::message::Msg;
use net_core::transport::Transport;
use net_core::wire::{WireDecode, WireEncode};
use sim_core::types::PlayerId;

struct Conn {
    id: PlayerId,
    transport: Box<dyn Transport>,
    broken: bool,
}

pub struct ServerHub {
    state: ServerState,
    conns: Vec<Conn>,
}

impl ServerHub {
    #[must_use]
    pub fn new(arena: ArenaCfg, rules: MatchRules) -> Self {
        Self {
            state: ServerState::new(arena, rules),
            conns: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Register a new connection and assign its session id.
    pub fn attach(&mut self, transport: Box<dyn Transport>) -> PlayerId {
        let id = self.state.connect();
        self.conns.push(Conn {
            id,
            transport,
            broken: false,
        });
        id
    }

    /// Explicitly drop a connection (the loopback analogue of a socket
    /// close) and broadcast the departure.
    pub fn detach(&mut self, id: PlayerId) {
        let before = self.conns.len();
        self.conns.retain(|c| c.id != id);
        if self.conns.len() != before {
            let mut out = Vec::new();
            self.state.disconnect(id, &mut out);
            self.dispatch(out);
        }
    }

    /// Drain every connection's inbound bytes, apply them, run the timers,
    /// and dispatch the results. Connections whose sends fail are treated
    /// as disconnected on the next pump.
    pub fn pump(&mut self, now_ms: u64) {
        let started = std::time::Instant::now();
        let mut out = Vec::new();
        // Sweep transports that broke on the previous dispatch first, so
        // their departure precedes anything else this pump produces.
        let broken: Vec<PlayerId> = self
            .conns
            .iter()
            .filter(|c| c.broken)
            .map(|c| c.id)
            .collect();
        for id in broken {
            self.conns.retain(|c| c.id != id);
            self.state.disconnect(id, &mut out);
        }
        for i in 0..self.conns.len() {
            let id = self.conns[i].id;
            while let Some(bytes) = self.conns[i].transport.try_recv() {
                match frame::read_msg(&bytes).and_then(|mut payload| Msg::decode(&mut payload)) {
                    Ok(msg) => self.state.handle(id, msg, now_ms, &mut out),
                    Err(e) => warn!("dropping undecodable frame from {id}: {e}"),
                }
            }
        }
        self.state.tick(now_ms, &mut out);
        self.dispatch(out);
        metrics::histogram!("relay.pump_ms").record(started.elapsed().as_secs_f64() * 1000.0);
    }

    fn dispatch(&mut self, out: Vec<Outgoing>) {
        for o in out {
            let mut payload = Vec::new();
            o.msg.encode(&mut payload);
            let mut framed = Vec::new();
            frame::write_msg(&mut framed, &payload);
            for conn in &mut self.conns {
                let wanted = match o.to {
                    Audience::All => true,
                    Audience::Except(id) => conn.id != id,
                    Audience::Only(id) => conn.id == id,
                };
                if wanted && conn.transport.try_send(framed.clone()).is_err() {
                    conn.broken = true;
                }
            }
        }
    }
}
