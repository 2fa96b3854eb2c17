//! The hub over loopback transports: framing, fanout, broken connections.

use data_runtime::arena::ArenaCfg;
use data_runtime::rules::MatchRules;
use net_core::frame;
use net_core::message::Msg;
use net_core::transport::{LocalLoopbackTransport, Transport};
use net_core::wire::{WireDecode, WireEncode};
use server_core::ServerHub;

fn send(t: &LocalLoopbackTransport, msg: &Msg) {
    let mut payload = Vec::new();
    msg.encode(&mut payload);
    let mut framed = Vec::new();
    frame::write_msg(&mut framed, &payload);
    t.try_send(framed).expect("send");
}

fn drain(t: &LocalLoopbackTransport) -> Vec<Msg> {
    let mut msgs = Vec::new();
    while let Some(bytes) = t.try_recv() {
        let mut payload = frame::read_msg(&bytes).expect("frame");
        msgs.push(Msg::decode(&mut payload).expect("decode"));
    }
    msgs
}

#[test]
fn join_fans_out_over_the_wire() {
    let mut hub = ServerHub::new(ArenaCfg::default(), MatchRules::default());
    let (ann, ann_server) = LocalLoopbackTransport::pair();
    let (bo, bo_server) = LocalLoopbackTransport::pair();
    hub.attach(Box::new(ann_server));
    hub.attach(Box::new(bo_server));

    send(&ann, &Msg::Join { team: 0, name: "ann".into() });
    hub.pump(0);
    send(&bo, &Msg::Join { team: 1, name: "bo".into() });
    hub.pump(16);

    let ann_msgs = drain(&ann);
    assert!(ann_msgs.iter().any(|m| matches!(m, Msg::Welcome { .. })));
    assert!(
        ann_msgs
            .iter()
            .any(|m| matches!(m, Msg::PlayerJoined { entry } if entry.name == "bo"))
    );
    let bo_msgs = drain(&bo);
    assert!(bo_msgs.iter().any(
        |m| matches!(m, Msg::Welcome { roster, .. } if roster.len() == 2)
    ));
    // Bo never sees its own join as a broadcast.
    assert!(
        !bo_msgs
            .iter()
            .any(|m| matches!(m, Msg::PlayerJoined { .. }))
    );
}

#[test]
fn garbage_frames_are_dropped_without_killing_the_pump() {
    let mut hub = ServerHub::new(ArenaCfg::default(), MatchRules::default());
    let (ann, ann_server) = LocalLoopbackTransport::pair();
    hub.attach(Box::new(ann_server));
    ann.try_send(vec![0xFF, 1, 2]).expect("send");
    send(&ann, &Msg::Join { team: 0, name: "ann".into() });
    hub.pump(0);
    assert!(drain(&ann).iter().any(|m| matches!(m, Msg::Welcome { .. })));
}

#[test]
fn dropped_transport_becomes_a_departure_broadcast() {
    let mut hub = ServerHub::new(ArenaCfg::default(), MatchRules::default());
    let (ann, ann_server) = LocalLoopbackTransport::pair();
    let (bo, bo_server) = LocalLoopbackTransport::pair();
    hub.attach(Box::new(ann_server));
    let bo_id = hub.attach(Box::new(bo_server));
    send(&ann, &Msg::Join { team: 0, name: "ann".into() });
    send(&bo, &Msg::Join { team: 1, name: "bo".into() });
    hub.pump(0);

    drop(bo);
    // First pump notices the send failure, second sweeps the connection.
    send(&ann, &Msg::Move {
        id: 0,
        pos: [-60.0, 0.0, 0.0],
        yaw: 0.0,
        pitch: 0.0,
        weapon: 2,
    });
    hub.pump(16);
    hub.pump(32);
    let msgs = drain(&ann);
    assert!(msgs.contains(&Msg::PlayerLeft { id: bo_id.0 }));
    assert_eq!(hub.state().roster_len(), 1);
}
