use crate::coords::{Rect, Vec2, Viewport};

/// Placement of a screen-aligned quad in normalized device coordinates.
///
/// `scale` is the quad size in NDC units (a full-window quad has scale 2),
/// `displacement` is the NDC position of its center.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Transform {
    pub scale: Vec2,
    pub displacement: Vec2,
}

impl Transform {
    /// Maps a pixel-space rectangle (origin top-left, Y down) to NDC
    /// (origin center, Y up).
    ///
    /// An invalid viewport (zero or non-finite) yields the zero transform,
    /// which draws nothing.
    pub fn from_pixel_rect(rect: Rect, viewport: Viewport) -> Self {
        if !viewport.is_valid() {
            return Self::default();
        }

        let width = 2.0 * rect.size.x / viewport.width;
        let height = 2.0 * rect.size.y / viewport.height;

        Self {
            scale: Vec2::new(width, height),
            displacement: Vec2::new(
                2.0 * rect.origin.x / viewport.width - 1.0 + width / 2.0,
                2.0 * -rect.origin.y / viewport.height + 1.0 - height / 2.0,
            ),
        }
    }
}
