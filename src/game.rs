//! Frame driver: owns the simulation and the draw surface and runs the
//! per-frame sequence against an injectable frame source.
use crate::config::Config;
use crate::core::map_set::MapSet;
use crate::core::process_events::InputSnapshot;
use crate::core::world::{Rules, World};
use crate::error::{Error, Result};
use crate::render::casters::RayCaster;
use crate::render::framebuffer::Framebuffer;
use crate::render::projector::Projector;
use crate::render::render3d::render_walls;
use crate::render::sprites::draw_enemies;

/// What happened during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub shot: bool,
    pub kills: usize,
    pub map_changed: bool,
}

/// Supplies input at each tick boundary and receives finished frames.
///
/// Returning `None` from `next_input` ends the loop.
pub trait FrameSource {
    fn next_input(&mut self) -> Option<InputSnapshot>;
    fn present(&mut self, fb: &Framebuffer, report: &FrameReport);
}

/// Largest accepted window edge in pixels.
pub const MAX_DIMENSION: i32 = 16_384;

pub struct Game {
    pub world: World,
    caster: RayCaster,
    projector: Projector,
    sprite_scale: f32,
    framebuffer: Framebuffer,
    distances: Vec<f32>,
}

impl Game {
    pub fn new(config: &Config) -> Result<Self> {
        let caster = RayCaster::new(config.fov, config.width, config.tile_size, config.max_depth)?;
        if config.width > MAX_DIMENSION {
            return Err(Error::InvalidParameter { what: "viewport width", value: config.width as f32 });
        }
        if config.height <= 0 || config.height > MAX_DIMENSION {
            return Err(Error::InvalidParameter { what: "viewport height", value: config.height as f32 });
        }
        let finite = [
            ("spawn x", config.spawn.x),
            ("spawn y", config.spawn.y),
            ("spawn angle", config.spawn.angle),
            ("speed", config.speed),
            ("turn step", config.turn_step),
        ];
        if let Some(&(what, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidParameter { what, value });
        }
        let maps = MapSet::new(config.map_entries()?)?;
        let rules = Rules {
            speed: config.speed,
            turn_step: config.turn_step,
            shot_cone: config.shot_cone,
            spawn: config.spawn,
        };
        tracing::debug!(
            width = config.width,
            height = config.height,
            maps = maps.len(),
            "game initialised"
        );
        Ok(Self {
            world: World::new(maps, rules),
            caster,
            projector: Projector::new(config.height as f32, config.wall_scale),
            sprite_scale: config.sprite_scale,
            framebuffer: Framebuffer::new(config.width as u32, config.height as u32),
            distances: vec![0.0; caster.ray_count()],
        })
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Wall distance per column from the last frame.
    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// clear, one-shot triggers, update, walls, enemies.
    pub fn frame(&mut self, input: &InputSnapshot) -> Result<FrameReport> {
        let mut report = FrameReport::default();
        self.framebuffer.clear();

        if input.fire {
            report.shot = true;
            report.kills = self.world.shoot();
        }
        if input.next_map {
            self.world.next_map();
            report.map_changed = true;
        }
        self.world.update(input);

        self.caster.cast_all(self.world.maze(), &self.world.player, &mut self.distances)?;
        render_walls(&mut self.framebuffer, &self.distances, &self.projector);
        draw_enemies(
            &mut self.framebuffer,
            &self.world.player,
            &self.world.enemies,
            self.caster.fov(),
            self.sprite_scale,
        );
        Ok(report)
    }

    /// Runs frames until the source stops; returns how many were drawn.
    pub fn run(&mut self, source: &mut impl FrameSource) -> Result<u64> {
        let mut frames = 0;
        while let Some(input) = source.next_input() {
            let report = self.frame(&input)?;
            source.present(&self.framebuffer, &report);
            frames += 1;
        }
        tracing::debug!(frames, "frame loop ended");
        Ok(frames)
    }
}
