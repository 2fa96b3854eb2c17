//! End-to-end over the loopback relay: join, a rifle duel, death, score,
//! and the delayed respawn, all through real framed messages.

use glam::vec3;
use skirmish::harness::LoopbackMatch;
use skirmish::sim::types::Team;

/// Seat both players on the open lane north of the center wall so the shot
/// path is terrain-free, and face the shooter down +x.
fn duel() -> LoopbackMatch {
    let mut m = LoopbackMatch::new(&[("ash", Team::Red), ("bryn", Team::Blue)]).expect("match");
    m.seats[0].client.body.pos.z = 25.0;
    m.seats[0].client.body.yaw = -std::f32::consts::FRAC_PI_2;
    m.seats[1].client.body.pos.z = 25.0;
    m
}

#[test]
fn clients_see_each_other_after_the_handshake() {
    let mut m = duel();
    m.run(3);
    for seat in &m.seats {
        assert!(seat.client.id.is_some());
        assert_eq!(seat.client.mirrors.len(), 1);
    }
    assert_eq!(m.hub.state().roster_len(), 2);
}

#[test]
fn rifle_duel_runs_kill_score_and_respawn_end_to_end() {
    let mut m = duel();
    // Only ash shoots; bryn stands and takes five body hits at 20 each.
    m.seats[0].input.fire = true;

    // Five shots 112ms apart plus ~0.5s of flight per bullet.
    m.run(80);
    let bryn_id = m.seats[1].client.id.expect("joined");
    assert!(m.seats[1].client.dead);
    assert_eq!(m.seats[1].client.hp, 0);
    assert_eq!(m.seats[0].client.scores, (1, 0));
    assert_eq!(m.seats[1].client.scores, (1, 0));
    let mirror = m.seats[0].client.mirrors.get(bryn_id).expect("mirror");
    assert!(!mirror.alive);
    assert_eq!(m.hub.state().player_hp(bryn_id), Some(0));

    // Past the 3s respawn delay bryn is back at the blue spawn, at full
    // health, on every view of the match.
    m.run(200);
    assert!(!m.seats[1].client.dead);
    assert_eq!(m.seats[1].client.hp, 100);
    assert_eq!(m.seats[1].client.body.pos, vec3(60.0, 0.0, 0.0));
    let mirror = m.seats[0].client.mirrors.get(bryn_id).expect("mirror");
    assert!(mirror.alive);
    assert_eq!(mirror.hp, 100);
    assert_eq!(m.hub.state().player_hp(bryn_id), Some(100));
}

#[test]
fn a_dead_player_publishes_nothing_until_respawn() {
    let mut m = duel();
    m.seats[0].input.fire = true;
    m.run(80);
    assert!(m.seats[1].client.dead);

    // bryn mashes movement while dead; the mirror on ash's side holds still.
    m.seats[1].input.forward = true;
    let before = m.seats[0]
        .client
        .mirrors
        .get(m.seats[1].client.id.expect("joined"))
        .expect("mirror")
        .pos;
    m.run(30);
    let held = m.seats[0]
        .client
        .mirrors
        .get(m.seats[1].client.id.expect("joined"))
        .expect("mirror")
        .pos;
    assert_eq!(before, held);
}
