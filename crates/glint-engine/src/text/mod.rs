//! Fonts and text layout.
//!
//! Fonts live in an explicitly owned [`FontRegistry`] that callers pass by
//! reference; there is no process-wide font table. Layout only needs glyph
//! metrics, expressed by [`GlyphMeasure`], so it runs the same against real
//! fonts and against [`FixedMeasure`] in headless sessions.

mod font_registry;
mod layout;

pub use font_registry::{FixedMeasure, FontId, FontLoadError, FontRegistry, GlyphMeasure};
pub use layout::{layout_text, GlyphQuad, TextLayout};
