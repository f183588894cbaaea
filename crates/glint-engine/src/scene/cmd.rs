use crate::coords::{ColorRgba, Rect, Vec2};
use crate::gfx::Transform;
use crate::text::GlyphQuad;

/// Filled, optionally rounded and bordered rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCmd {
    pub rect: Rect,
    pub fill: ColorRgba,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: ColorRgba,
}

/// Pre-positioned glyph quads of one text block.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRunCmd {
    pub origin: Vec2,
    pub glyphs: Vec<GlyphQuad>,
    pub family: String,
    pub size: f32,
    pub color: ColorRgba,
}

/// Blit of a panel's composition target onto the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCmd {
    /// Raw id of the panel that owns the target.
    pub source: u64,
    pub target_size: (u32, u32),
    pub transform: Transform,
    pub corner_radius: f32,
}

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Panel(PanelCmd),
    Glyphs(GlyphRunCmd),
    Composite(CompositeCmd),
}
