//! Coordinate and geometry types shared across the engine and UI.
//!
//! Pixel space:
//! - origin top-left
//! - +X right, +Y down
//!
//! Device space (NDC) is only produced by [`crate::gfx::Transform`].

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
