//! First-person raycasting renderer for grid mazes, with hit-scan enemies.

pub mod audio_manager;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use game::{FrameReport, FrameSource, Game};
