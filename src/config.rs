//! Runtime settings, optionally read from a TOML file.
use std::path::Path;

use serde::Deserialize;

use crate::core::map_set::MapEntry;
use crate::core::maze::{Maze, builtin_maps};
use crate::core::player::Spawn;
use crate::error::{Error, Result};

/// Enemies every stock map starts with.
pub const DEFAULT_ENEMIES: &[(f32, f32)] = &[(200.0, 200.0)];

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: i32,
    pub height: i32,
    /// Total horizontal view angle (rad).
    pub fov: f32,
    pub tile_size: f32,
    pub max_depth: f32,
    pub speed: f32,
    pub turn_step: f32,
    /// Half-width of the hit-scan cone (rad).
    pub shot_cone: f32,
    pub wall_scale: f32,
    pub sprite_scale: f32,
    pub spawn: Spawn,
    pub maps: Vec<MapSpec>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MapSpec {
    pub name: String,
    pub layout: Vec<Vec<u8>>,
    #[serde(default = "default_enemies")]
    pub enemies: Vec<[f32; 2]>,
}

fn default_enemies() -> Vec<[f32; 2]> {
    DEFAULT_ENEMIES.iter().map(|&(x, y)| [x, y]).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fov: std::f32::consts::PI / 3.0,
            tile_size: 64.0,
            max_depth: 800.0,
            speed: 2.0,
            turn_step: 0.05,
            shot_cone: 0.2,
            wall_scale: 0.02,
            sprite_scale: 500.0,
            spawn: Spawn::default(),
            maps: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), maps = config.maps.len(), "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Maps from the file, or the stock set when none are given.
    pub fn map_entries(&self) -> Result<Vec<MapEntry>> {
        if self.maps.is_empty() {
            return Ok(builtin_maps()
                .into_iter()
                .map(|maze| MapEntry { maze, enemies: DEFAULT_ENEMIES.to_vec() })
                .collect());
        }
        self.maps
            .iter()
            .map(|spec| {
                Ok(MapEntry {
                    maze: Maze::new(spec.name.clone(), spec.layout.clone())?,
                    enemies: spec.enemies.iter().map(|&[x, y]| (x, y)).collect(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let c = Config::from_toml_str("").unwrap();
        assert_eq!((c.width, c.height), (640, 480));
        assert_eq!(c.max_depth, 800.0);
        assert_eq!(c.spawn, Spawn::default());
        assert_eq!(c.map_entries().unwrap().len(), 2);
    }

    #[test]
    fn maps_and_overrides_are_read() {
        let c = Config::from_toml_str(
            r#"
            width = 320
            shot_cone = 0.1

            [spawn]
            x = 96.0

            [[maps]]
            name = "tiny"
            layout = [[1,1,1],[1,0,1],[1,1,1]]
            enemies = [[96.0, 96.0], [100.0, 90.0]]

            [[maps]]
            name = "stock enemies"
            layout = [[1,1],[1,1]]
            "#,
        )
        .unwrap();
        assert_eq!(c.width, 320);
        assert_eq!(c.height, 480);
        assert_eq!(c.shot_cone, 0.1);
        assert_eq!(c.spawn.x, 96.0);
        assert_eq!(c.spawn.y, 100.0);
        let entries = c.map_entries().unwrap();
        assert_eq!(entries[0].maze.name(), "tiny");
        assert_eq!(entries[0].enemies.len(), 2);
        assert_eq!(entries[1].enemies, vec![(200.0, 200.0)]);
    }

    #[test]
    fn ragged_map_in_file_fails() {
        let c = Config::from_toml_str(
            r#"
            [[maps]]
            name = "ragged"
            layout = [[1,1,1],[1,0]]
            "#,
        )
        .unwrap();
        assert!(matches!(c.map_entries(), Err(Error::NonRectangularGrid { .. })));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        assert!(matches!(Config::from_toml_str("width = \"wide\""), Err(Error::ConfigParse(_))));
    }
}
