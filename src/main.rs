use log::info;
use skirmish::harness::LoopbackMatch;
use skirmish::sim::types::Team;

/// Two bots trade rifle fire across the open lane north of the center wall
/// until one side scores, exercising the whole client/relay loop in-process.
fn main() -> anyhow::Result<()> {
    let default = "info,skirmish=info";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let mut m = LoopbackMatch::new(&[("ash", Team::Red), ("bryn", Team::Blue)])?;
    // Clear line of sight: shift both bots off the center wall and face them
    // down the x axis at each other.
    m.seats[0].client.body.pos.z = 25.0;
    m.seats[0].client.body.yaw = -std::f32::consts::FRAC_PI_2;
    m.seats[1].client.body.pos.z = 25.0;
    m.seats[1].client.body.yaw = std::f32::consts::FRAC_PI_2;
    for seat in &mut m.seats {
        seat.input.fire = true;
    }

    let mut last_scores = (0, 0);
    for _ in 0..1200 {
        m.step();
        let scores = m.seats[0].client.scores;
        if scores != last_scores {
            info!(
                "t={}ms score red {} blue {}",
                m.now_ms(),
                scores.0,
                scores.1
            );
            last_scores = scores;
        }
        if scores.0 + scores.1 >= 3 {
            break;
        }
    }
    let (red, blue) = m.seats[0].client.scores;
    info!("final score: red {red} blue {blue}");
    Ok(())
}
