//! Simulation state: the current map, the viewer and the enemies.
use crate::core::enemy::{Enemy, shoot};
use crate::core::map_set::MapSet;
use crate::core::maze::Maze;
use crate::core::player::{Player, Spawn};
use crate::core::process_events::{InputSnapshot, process_events};

/// Movement and shooting constants.
#[derive(Clone, Copy, Debug)]
pub struct Rules {
    pub speed: f32,
    pub turn_step: f32,
    pub shot_cone: f32,
    pub spawn: Spawn,
}

pub struct World {
    maps: MapSet,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    rules: Rules,
}

impl World {
    pub fn new(maps: MapSet, rules: Rules) -> Self {
        let mut world = Self {
            player: Player::spawn(&rules.spawn, rules.speed),
            enemies: Vec::new(),
            maps,
            rules,
        };
        world.reset();
        world
    }

    #[inline]
    pub fn maze(&self) -> &Maze {
        &self.maps.current().maze
    }

    pub fn map_index(&self) -> usize {
        self.maps.index()
    }

    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    /// Viewer back to spawn, enemies back to the current map's roster.
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.rules.spawn, self.rules.speed);
        self.enemies = self
            .maps
            .current()
            .enemies
            .iter()
            .map(|&(x, y)| Enemy::new(x, y))
            .collect();
    }

    pub fn update(&mut self, input: &InputSnapshot) {
        process_events(&mut self.player, input, self.rules.turn_step);
    }

    pub fn shoot(&mut self) -> usize {
        shoot(&self.player, &mut self.enemies, self.rules.shot_cone)
    }

    /// Advances to the next map and fully resets the simulation for it.
    pub fn next_map(&mut self) {
        self.maps.advance();
        self.reset();
        tracing::info!(
            index = self.maps.index(),
            name = self.maze().name(),
            "map changed"
        );
    }

    pub fn alive_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.alive)
    }
}
