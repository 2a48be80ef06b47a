//! Core game types and logic (data, input, world).
//!
//! Re-exports:
//! - `maze`: Tile grid loading and validation
//! - `map_set`: Cyclic set of maps with their enemy rosters
//! - `player`: Viewer data and movement
//! - `enemy`: Enemies and hit-scan shooting
//! - `process_events`: Input snapshot and per-tick update
//! - `world`: Simulation state tying the above together

pub mod maze;
pub mod map_set;
pub mod player;
pub mod enemy;
pub mod process_events;
pub mod world;
