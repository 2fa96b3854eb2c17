//! Mouse deltas to yaw/pitch.

use data_runtime::input::MouseCfg;
use sim_core::body::PlayerBody;

/// Moving the mouse right turns right (yaw decreases); moving it up looks
/// up. Pitch is clamped to the configured band.
pub fn apply_mouse_delta(cfg: &MouseCfg, body: &mut PlayerBody, dx: f32, dy: f32) {
    let s = cfg.sensitivity_rad_per_count;
    body.yaw -= dx * s;
    body.pitch = (body.pitch - dy * s).clamp(cfg.min_pitch_rad, cfg.max_pitch_rad);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec3;

    #[test]
    fn pitch_clamps_at_both_limits() {
        let cfg = MouseCfg::default();
        let mut b = PlayerBody::at(Vec3::ZERO);
        apply_mouse_delta(&cfg, &mut b, 0.0, -10_000.0);
        assert_abs_diff_eq!(b.pitch, cfg.max_pitch_rad);
        apply_mouse_delta(&cfg, &mut b, 0.0, 10_000.0);
        assert_abs_diff_eq!(b.pitch, cfg.min_pitch_rad);
    }

    #[test]
    fn yaw_is_unbounded() {
        let cfg = MouseCfg::default();
        let mut b = PlayerBody::at(Vec3::ZERO);
        apply_mouse_delta(&cfg, &mut b, 10_000.0, 0.0);
        assert!(b.yaw < -6.28);
    }
}
