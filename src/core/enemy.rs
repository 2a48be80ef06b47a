//! Enemies and the hit-scan shot.
use crate::core::player::Player;

/// Wraps an angle into [-pi, pi]. Values already in range come back
/// unchanged; non-finite input gives NaN.
#[inline]
pub fn normalize_angle(a: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if (-PI..=PI).contains(&a) { return a; }
    (a + PI).rem_euclid(TAU) - PI
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, alive: true }
    }

    /// Bearing from the player to this enemy, relative to the player's heading.
    #[inline]
    pub fn relative_bearing(&self, player: &Player) -> f32 {
        let dx = self.x - player.pos.x;
        let dy = self.y - player.pos.y;
        normalize_angle(dy.atan2(dx) - player.a)
    }

    #[inline]
    pub fn distance_to(&self, player: &Player) -> f32 {
        let dx = self.x - player.pos.x;
        let dy = self.y - player.pos.y;
        (dx*dx + dy*dy).sqrt()
    }
}

/// Kills every live enemy within `cone` radians of the heading.
/// No range limit and no occlusion: walls do not stop the shot.
pub fn shoot(player: &Player, enemies: &mut [Enemy], cone: f32) -> usize {
    let mut kills = 0;
    for (idx, enemy) in enemies.iter_mut().enumerate() {
        if !enemy.alive { continue; }
        if enemy.relative_bearing(player).abs() < cone {
            enemy.alive = false;
            kills += 1;
            tracing::info!(enemy = idx, x = enemy.x, y = enemy.y, "enemy eliminated");
        }
    }
    kills
}
