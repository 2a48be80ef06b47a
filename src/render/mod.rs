//! Rendering utilities.
//!
//! Re-exports:
//! - `framebuffer`: CPU draw surface
//! - `casters`: Ray casting against the tile grid
//! - `projector`: Distance to strip height and shade
//! - `render3d`: Wall column renderer
//! - `sprites`: Enemy sprite projection and drawing

pub mod framebuffer;
pub mod casters;
pub mod projector;
pub mod render3d;
pub mod sprites;
