use crate::coords::{Rect, Vec2};

use super::GlyphMeasure;

/// One positioned character quad, relative to the text block origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphQuad {
    pub ch: char,
    pub rect: Rect,
}

/// Result of laying out a text block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    /// Visible glyphs in reading order. Whitespace produces no quads.
    pub glyphs: Vec<GlyphQuad>,
    pub line_count: usize,
    /// Extent of the laid-out block.
    pub bounds: Vec2,
}

/// Lays out `text` word by word, wrapping at `max_width` when given.
///
/// Words are never split: a word wider than `max_width` gets a line of its
/// own and overflows. `'\n'` forces a line break.
pub fn layout_text(
    measure: &dyn GlyphMeasure,
    text: &str,
    family: &str,
    size: f32,
    max_width: Option<f32>,
) -> TextLayout {
    let line_height = measure.line_height(family, size);
    let space = measure.advance(family, size, ' ');

    let mut out = TextLayout::default();
    let mut widest = 0.0f32;

    for paragraph in text.split('\n') {
        let mut pen_x = 0.0f32;
        let mut y = out.line_count as f32 * line_height;
        let mut line_started = false;

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let word_width: f32 = word.chars().map(|c| measure.advance(family, size, c)).sum();

            let needed = if line_started { pen_x + space + word_width } else { word_width };
            if line_started && max_width.is_some_and(|max| needed > max) {
                widest = widest.max(pen_x);
                out.line_count += 1;
                y += line_height;
                pen_x = 0.0;
            } else if line_started {
                pen_x += space;
            }

            for c in word.chars() {
                let advance = measure.advance(family, size, c);
                out.glyphs.push(GlyphQuad {
                    ch: c,
                    rect: Rect::new(pen_x, y, advance, line_height),
                });
                pen_x += advance;
            }
            line_started = true;
        }

        widest = widest.max(pen_x);
        out.line_count += 1;
    }

    out.bounds = Vec2::new(widest, out.line_count as f32 * line_height);
    out
}
