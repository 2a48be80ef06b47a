//! Viewer position, heading and per-tick movement.
use raylib::prelude::*;
use serde::Deserialize;

/// Fixed spawn the viewer returns to on every map change.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Spawn {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl Default for Spawn {
    fn default() -> Self {
        Self { x: 100.0, y: 100.0, angle: 0.0 }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vector2,
    pub a: f32,     // heading (rad)
    pub speed: f32, // units per tick
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32, speed: f32) -> Self {
        Self { pos: Vector2::new(x, y), a: angle, speed }
    }

    pub fn spawn(spawn: &Spawn, speed: f32) -> Self {
        Self::new(spawn.x, spawn.y, spawn.angle, speed)
    }

    /// Moves along the heading; negative `dir` walks backwards.
    /// Walls are not consulted.
    #[inline]
    pub fn step(&mut self, dir: f32) {
        self.pos.x += self.a.cos() * self.speed * dir;
        self.pos.y += self.a.sin() * self.speed * dir;
    }

    #[inline]
    pub fn turn(&mut self, delta: f32) {
        self.a += delta;
    }
}
