//! Input snapshot and per-tick viewer update.
use raylib::prelude::*;
use crate::core::player::Player;

/// Key state sampled once at a tick boundary.
///
/// Movement and rotation are held flags and combine freely within a tick.
/// `fire` and `next_map` are edge flags: set only on the tick the key went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool,
    pub next_map: bool,
}

impl InputSnapshot {
    /// Arrow keys move and turn, Space fires, M switches map.
    pub fn poll(window: &RaylibHandle) -> Self {
        Self {
            forward: window.is_key_down(KeyboardKey::KEY_UP),
            backward: window.is_key_down(KeyboardKey::KEY_DOWN),
            turn_left: window.is_key_down(KeyboardKey::KEY_LEFT),
            turn_right: window.is_key_down(KeyboardKey::KEY_RIGHT),
            fire: window.is_key_pressed(KeyboardKey::KEY_SPACE),
            next_map: window.is_key_pressed(KeyboardKey::KEY_M),
        }
    }
}

/// Applies held movement and rotation for one tick. No collision check:
/// the viewer can walk through walls.
pub fn process_events(player: &mut Player, input: &InputSnapshot, turn_step: f32) {
    if input.forward { player.step(1.0); }
    if input.backward { player.step(-1.0); }
    if input.turn_left { player.turn(-turn_step); }
    if input.turn_right { player.turn(turn_step); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_turn_apply_in_same_tick() {
        let mut p = Player::new(100.0, 100.0, 0.0, 2.0);
        let input = InputSnapshot { forward: true, turn_left: true, ..Default::default() };
        process_events(&mut p, &input, 0.05);
        assert!((p.pos.x - 102.0).abs() < 1e-4);
        assert!((p.a + 0.05).abs() < 1e-6);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut p = Player::new(100.0, 100.0, 0.3, 2.0);
        let input = InputSnapshot {
            forward: true,
            backward: true,
            turn_left: true,
            turn_right: true,
            ..Default::default()
        };
        process_events(&mut p, &input, 0.05);
        assert!((p.pos.x - 100.0).abs() < 1e-4);
        assert!((p.pos.y - 100.0).abs() < 1e-4);
        assert!((p.a - 0.3).abs() < 1e-6);
    }

    #[test]
    fn walks_through_walls() {
        // nothing but the input moves the viewer
        let mut p = Player::new(10.0, 10.0, std::f32::consts::PI, 2.0);
        let input = InputSnapshot { forward: true, ..Default::default() };
        for _ in 0..20 { process_events(&mut p, &input, 0.05); }
        assert!(p.pos.x < -29.0);
    }
}
