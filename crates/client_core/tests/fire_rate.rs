//! Automatic hold self-throttles on the cooldown; fire events never come
//! closer together than the weapon's rate.

mod common;

use client_core::input::InputState;
use common::{TICK_MS, joined_client};
use net_core::message::Msg;

#[test]
fn held_rifle_fires_at_intervals_of_at_least_the_rate() {
    let mut c = joined_client();
    let input = InputState {
        fire: true,
        ..InputState::default()
    };
    let mut fire_times = Vec::new();
    for tick in 0..64u64 {
        let now = tick * TICK_MS;
        let mut out = Vec::new();
        c.tick(now, &input, &mut out);
        if out.iter().any(|m| matches!(m, Msg::Fire { .. })) {
            fire_times.push(now);
        }
    }
    assert!(fire_times.len() >= 5, "rifle should keep firing while held");
    for pair in fire_times.windows(2) {
        assert!(pair[1] - pair[0] >= 100, "fired {} then {}", pair[0], pair[1]);
    }
}

#[test]
fn every_tick_publishes_exactly_one_move() {
    let mut c = joined_client();
    let input = InputState::default();
    for tick in 0..10u64 {
        let mut out = Vec::new();
        c.tick(tick * TICK_MS, &input, &mut out);
        let moves = out
            .iter()
            .filter(|m| matches!(m, Msg::Move { .. }))
            .count();
        assert_eq!(moves, 1);
    }
}

#[test]
fn skipped_ticks_publish_nothing() {
    let mut c = joined_client();
    let input = InputState::default();
    let mut out = Vec::new();
    c.tick(0, &input, &mut out);
    out.clear();
    // 5 ms later is inside the 60 Hz budget.
    c.tick(5, &input, &mut out);
    assert!(out.is_empty());
}
