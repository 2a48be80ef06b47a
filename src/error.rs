//! Crate error type.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("map '{map}' has no rows")]
    EmptyGrid { map: String },

    #[error("map '{map}' is not rectangular: row {row} has {found} cells, expected {expected}")]
    NonRectangularGrid {
        map: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("map '{map}' line {line}: unexpected character {ch:?}")]
    BadCell { map: String, line: usize, ch: char },

    #[error("map set is empty")]
    EmptyMapSet,

    #[error("field of view must be in (0, 2pi), got {0}")]
    InvalidFov(f32),

    #[error("ray count must be positive, got {0}")]
    InvalidRayCount(i32),

    #[error("invalid {what}: {value}")]
    InvalidParameter { what: &'static str, value: f32 },

    #[error("distance buffer has {found} slots, ray count is {expected}")]
    ColumnMismatch { expected: usize, found: usize },

    #[error("could not read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("graphics error: {0}")]
    Graphics(String),
}
