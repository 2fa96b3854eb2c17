//! Locally owned projectiles and melee swings turn into damage reports;
//! remote echoes never do.

mod common;

use client_core::input::InputState;
use common::{TICK_MS, add_peer, joined_client};
use data_runtime::ids::WeaponId;
use net_core::message::Msg;

fn run_until_report(c: &mut client_core::client::GameClient, input: &InputState) -> Option<Msg> {
    for tick in 0..30u64 {
        let mut out = Vec::new();
        c.tick(tick * TICK_MS, input, &mut out);
        if let Some(m) = out
            .into_iter()
            .find(|m| matches!(m, Msg::DamageReport { .. }))
        {
            return Some(m);
        }
    }
    None
}

#[test]
fn rifle_hit_reports_body_damage() {
    let mut c = joined_client();
    // Straight down the aim line at zero yaw (negative Z from spawn).
    add_peer(&mut c, 2, [-60.0, 0.0, -10.0]);
    let input = InputState {
        fire: true,
        ..InputState::default()
    };
    let report = run_until_report(&mut c, &input).expect("hit lands");
    assert_eq!(
        report,
        Msg::DamageReport {
            victim: 2,
            amount: 20
        }
    );
    assert_eq!(c.live_projectiles(), 0, "the projectile is consumed");
}

#[test]
fn only_the_nearest_of_two_lined_up_victims_is_reported() {
    let mut c = joined_client();
    add_peer(&mut c, 2, [-60.0, 0.0, -8.0]);
    add_peer(&mut c, 3, [-60.0, 0.0, -14.0]);
    let input = InputState {
        fire: true,
        ..InputState::default()
    };
    let report = run_until_report(&mut c, &input).expect("hit lands");
    assert!(matches!(report, Msg::DamageReport { victim: 2, .. }));
}

#[test]
fn knife_swing_reports_melee_damage() {
    let mut c = joined_client();
    add_peer(&mut c, 2, [-60.0, 0.0, -2.0]);
    let input = InputState {
        fire: true,
        select_weapon: Some(WeaponId(5)),
        ..InputState::default()
    };
    let mut out = Vec::new();
    c.tick(0, &input, &mut out);
    assert!(out.contains(&Msg::DamageReport {
        victim: 2,
        amount: 50
    }));
    // A knife dispatch spawns no projectile and announces no fire.
    assert_eq!(c.live_projectiles(), 0);
    assert!(!out.iter().any(|m| matches!(m, Msg::Fire { .. })));
}

#[test]
fn knife_out_of_range_reports_nothing() {
    let mut c = joined_client();
    add_peer(&mut c, 2, [-60.0, 0.0, -6.0]);
    let input = InputState {
        fire: true,
        select_weapon: Some(WeaponId(5)),
        ..InputState::default()
    };
    let mut out = Vec::new();
    c.tick(0, &input, &mut out);
    assert!(!out.iter().any(|m| matches!(m, Msg::DamageReport { .. })));
}

#[test]
fn peer_fire_echo_is_simulated_but_never_reports_damage() {
    let mut c = joined_client();
    add_peer(&mut c, 2, [-60.0, 0.0, -20.0]);
    // Peer 2 shoots straight through us and peer 3's position.
    c.apply(&Msg::Fire {
        id: 2,
        origin: [-60.0, 0.9, -19.0],
        vel: [0.0, 0.0, 240.0],
        weapon: 2,
    });
    assert_eq!(c.live_projectiles(), 1);
    let input = InputState::default();
    for tick in 0..70u64 {
        let mut out = Vec::new();
        c.tick(tick * TICK_MS, &input, &mut out);
        assert!(!out.iter().any(|m| matches!(m, Msg::DamageReport { .. })));
    }
    assert_eq!(c.live_projectiles(), 0, "echo expires on its lifetime");
}
