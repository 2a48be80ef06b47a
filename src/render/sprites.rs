//! Enemy sprites: flat squares placed by bearing, sized by distance.
//!
//! Visibility is a hard cutoff at the FOV edge, so sprites pop in and out
//! there instead of being partially drawn.
use raylib::prelude::*;
use crate::core::enemy::Enemy;
use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;

pub const ENEMY_COLOR: Color = Color::RED;

/// Slack on the FOV edge test so atan2 rounding keeps edge enemies visible.
const EDGE_SLACK: f32 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteRect {
    pub center_x: f32,
    pub size: f32,
}

/// Maps a bearing relative to the heading onto `[0, width]`.
#[inline]
pub fn bearing_to_screen_x(diff: f32, fov: f32, width: f32) -> f32 {
    (diff + fov / 2.0) / fov * width
}

pub fn project_enemy(
    player: &Player,
    enemy: &Enemy,
    fov: f32,
    screen_w: f32,
    screen_h: f32,
    size_k: f32,
) -> Option<SpriteRect> {
    if !enemy.alive { return None; }
    let dist = enemy.distance_to(player);
    if dist <= f32::EPSILON { return None; }
    let diff = enemy.relative_bearing(player);
    if diff.abs() > fov / 2.0 + EDGE_SLACK { return None; }
    Some(SpriteRect {
        center_x: bearing_to_screen_x(diff, fov, screen_w),
        size: (size_k / dist).min(screen_h),
    })
}

pub fn draw_enemies(
    fb: &mut Framebuffer,
    player: &Player,
    enemies: &[Enemy],
    fov: f32,
    size_k: f32,
) {
    let (sw, sh) = (fb.width as f32, fb.height as f32);
    for enemy in enemies {
        if let Some(r) = project_enemy(player, enemy, fov, sw, sh, size_k) {
            fb.fill_rect(r.center_x - r.size / 2.0, sh / 2.0 - r.size / 2.0, r.size, r.size, ENEMY_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const FOV: f32 = PI / 3.0;

    #[test]
    fn on_heading_is_screen_center() {
        let p = Player::new(0.0, 0.0, 0.0, 2.0);
        let r = project_enemy(&p, &Enemy::new(100.0, 0.0), FOV, 640.0, 480.0, 500.0).unwrap();
        assert!((r.center_x - 320.0).abs() < 1e-3);
        assert!((r.size - 5.0).abs() < 1e-4);
    }

    #[test]
    fn fov_edges_map_to_screen_edges() {
        assert!(bearing_to_screen_x(-FOV / 2.0, FOV, 640.0).abs() < 1e-3);
        assert!((bearing_to_screen_x(FOV / 2.0, FOV, 640.0) - 640.0).abs() < 1e-3);
    }

    #[test]
    fn enemies_on_fov_edges_land_on_screen_edges() {
        let p = Player::new(0.0, 0.0, 0.0, 2.0);
        let half = FOV / 2.0;
        let right = Enemy::new(100.0 * half.cos(), 100.0 * half.sin());
        let left = Enemy::new(100.0 * half.cos(), -100.0 * half.sin());
        let r = project_enemy(&p, &right, FOV, 640.0, 480.0, 500.0).unwrap();
        let l = project_enemy(&p, &left, FOV, 640.0, 480.0, 500.0).unwrap();
        assert!((r.center_x - 640.0).abs() < 0.05, "{}", r.center_x);
        assert!(l.center_x.abs() < 0.05, "{}", l.center_x);
        // just past the edge is cut off
        let past = Enemy::new(100.0 * (half + 0.01).cos(), 100.0 * (half + 0.01).sin());
        assert!(project_enemy(&p, &past, FOV, 640.0, 480.0, 500.0).is_none());
    }

    #[test]
    fn outside_fov_or_dead_is_hidden() {
        let p = Player::new(0.0, 0.0, 0.0, 2.0);
        assert!(project_enemy(&p, &Enemy::new(0.0, 100.0), FOV, 640.0, 480.0, 500.0).is_none());
        assert!(project_enemy(&p, &Enemy::new(-100.0, 0.0), FOV, 640.0, 480.0, 500.0).is_none());
        let dead = Enemy { x: 100.0, y: 0.0, alive: false };
        assert!(project_enemy(&p, &dead, FOV, 640.0, 480.0, 500.0).is_none());
        assert!(project_enemy(&p, &Enemy::new(0.0, 0.0), FOV, 640.0, 480.0, 500.0).is_none());
    }

    #[test]
    fn close_enemy_is_capped() {
        let p = Player::new(0.0, 0.0, 0.0, 2.0);
        let r = project_enemy(&p, &Enemy::new(0.5, 0.0), FOV, 640.0, 480.0, 500.0).unwrap();
        assert_eq!(r.size, 480.0);
    }

    #[test]
    fn draws_red_square_at_center() {
        let mut fb = Framebuffer::new(64, 48);
        let p = Player::new(0.0, 0.0, 0.0, 2.0);
        draw_enemies(&mut fb, &p, &[Enemy::new(50.0, 0.0)], FOV, 500.0);
        // size 10 centered at (32, 24)
        assert_eq!(fb.get_pixel(32, 24), ENEMY_COLOR);
        assert_eq!(fb.get_pixel(27, 19), ENEMY_COLOR);
        assert_eq!(fb.get_pixel(26, 24), Color::BLACK);
        assert_eq!(fb.get_pixel(32, 30), Color::BLACK);
    }
}
