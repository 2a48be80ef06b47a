//! Ray casting: one fixed-step march per screen column.
use raylib::prelude::*;
use crate::core::maze::Maze;
use crate::core::player::Player;
use crate::error::{Error, Result};

/// March increment in world units.
pub const STEP: f32 = 1.0;

/// Largest depth whose unit steps are all exact in f32 (2^24).
pub const MAX_DEPTH_LIMIT: f32 = 16_777_216.0;

#[derive(Clone, Copy, Debug)]
pub struct RayCaster {
    fov: f32,
    ray_count: usize,
    tile_size: f32,
    max_depth: f32,
}

impl RayCaster {
    pub fn new(fov: f32, ray_count: i32, tile_size: f32, max_depth: f32) -> Result<Self> {
        if !(fov > 0.0 && fov < std::f32::consts::TAU) {
            return Err(Error::InvalidFov(fov));
        }
        if ray_count <= 0 {
            return Err(Error::InvalidRayCount(ray_count));
        }
        if !(tile_size > 0.0 && tile_size.is_finite()) {
            return Err(Error::InvalidParameter { what: "tile size", value: tile_size });
        }
        if !(max_depth > 0.0 && max_depth <= MAX_DEPTH_LIMIT) {
            return Err(Error::InvalidParameter { what: "max depth", value: max_depth });
        }
        Ok(Self { fov, ray_count: ray_count as usize, tile_size, max_depth })
    }

    #[inline] pub fn fov(&self) -> f32 { self.fov }
    #[inline] pub fn ray_count(&self) -> usize { self.ray_count }

    /// Angle of column `i`; rays span `[a - fov/2, a + fov/2)`.
    #[inline]
    pub fn ray_angle(&self, player_a: f32, i: usize) -> f32 {
        player_a - self.fov / 2.0 + (self.fov * i as f32) / self.ray_count as f32
    }

    /// Distance from `origin` to the first wall along `a`.
    ///
    /// Leaving the grid counts as a hit at `max_depth`, and so does running
    /// out of depth without hitting anything.
    pub fn cast_ray(&self, maze: &Maze, origin: Vector2, a: f32) -> f32 {
        let (dir_x, dir_y) = (a.cos(), a.sin());
        let steps = (self.max_depth / STEP).ceil() as u32;
        for n in 1..=steps {
            let d = n as f32 * STEP;
            let (i, j) = Maze::tile_coords(origin.x + dir_x * d, origin.y + dir_y * d, self.tile_size);
            match maze.tile(i, j) {
                None => return self.max_depth,
                Some(t) if t > 0 => return d.min(self.max_depth),
                Some(_) => {}
            }
        }
        self.max_depth
    }

    /// Fills `out[i]` with the wall distance for column `i`.
    pub fn cast_all(&self, maze: &Maze, player: &Player, out: &mut [f32]) -> Result<()> {
        if out.len() != self.ray_count {
            return Err(Error::ColumnMismatch { expected: self.ray_count, found: out.len() });
        }
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.cast_ray(maze, player.pos, self.ray_angle(player.a, i));
        }
        Ok(())
    }
}
