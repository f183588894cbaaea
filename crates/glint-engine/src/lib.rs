//! Glint engine crate.
//!
//! Platform-agnostic pieces shared by the UI layer: geometry, input, timing,
//! logging, the draw stream, and the contracts of the graphics collaborators
//! (window metrics, composition targets, textures) the UI renders through.

pub mod coords;
pub mod gfx;
pub mod input;
pub mod logging;
pub mod scene;
pub mod text;
pub mod time;
pub mod world;
