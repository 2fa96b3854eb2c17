//! Input snapshot for one tick of local player intent.

use data_runtime::ids::WeaponId;

/// Held keys persist across ticks; mouse deltas and weapon-change intents
/// are one-shot and cleared by [`InputState::clear_frame`] after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub jump: bool,
    /// Fire input held this tick; release clears the semi-auto latch.
    pub fire: bool,
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    /// +1 scroll forward, -1 scroll back, 0 none.
    pub cycle_weapon: i8,
    /// Direct numeric weapon selection.
    pub select_weapon: Option<WeaponId>,
}

impl InputState {
    pub fn clear_frame(&mut self) {
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
        self.cycle_weapon = 0;
        self.select_weapon = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_frame_keeps_held_keys() {
        let mut s = InputState {
            forward: true,
            fire: true,
            mouse_dx: 3.0,
            cycle_weapon: 1,
            select_weapon: Some(WeaponId(5)),
            ..InputState::default()
        };
        s.clear_frame();
        assert!(s.forward && s.fire);
        assert_eq!(s.mouse_dx, 0.0);
        assert_eq!(s.cycle_weapon, 0);
        assert!(s.select_weapon.is_none());
    }
}
