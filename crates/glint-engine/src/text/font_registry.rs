use std::collections::HashMap;
use std::fmt;

/// Error returned by [`FontRegistry::load`].
#[derive(Debug, Clone)]
pub struct FontLoadError {
    pub family: String,
    pub reason: String,
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load font family '{}': {}", self.family, self.reason)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontRegistry`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(usize);

/// Glyph metrics needed by text layout.
pub trait GlyphMeasure {
    fn has_family(&self, family: &str) -> bool;

    /// Horizontal advance of `ch` at `size` px.
    fn advance(&self, family: &str, size: f32, ch: char) -> f32;

    /// Distance between consecutive baselines at `size` px.
    fn line_height(&self, family: &str, size: f32) -> f32;
}

/// Family-name keyed collection of parsed fonts.
///
/// Created at startup, handed by reference to whatever lays out or renders
/// text, and dropped at teardown.
#[derive(Default)]
pub struct FontRegistry {
    fonts: Vec<fontdue::Font>,
    families: HashMap<String, FontId>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TrueType/OpenType font and registers it under `family`.
    ///
    /// Registering a family twice replaces the earlier mapping.
    pub fn load(&mut self, family: impl Into<String>, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let family = family.into();
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError { family: family.clone(), reason: e.to_string() })?;

        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        if self.families.insert(family.clone(), id).is_some() {
            log::debug!("font family '{family}' re-registered");
        }
        Ok(id)
    }

    pub fn id(&self, family: &str) -> Option<FontId> {
        self.families.get(family).copied()
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    fn font(&self, family: &str) -> Option<&fontdue::Font> {
        self.id(family).and_then(|id| self.fonts.get(id.0))
    }
}

impl GlyphMeasure for FontRegistry {
    fn has_family(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    fn advance(&self, family: &str, size: f32, ch: char) -> f32 {
        self.font(family)
            .map(|font| font.metrics(ch, size).advance_width)
            .unwrap_or(0.0)
    }

    fn line_height(&self, family: &str, size: f32) -> f32 {
        self.font(family)
            .and_then(|font| font.horizontal_line_metrics(size))
            .map(|m| m.new_line_size)
            .unwrap_or(size * 1.2)
    }
}

/// Monospaced stand-in metrics: every glyph advances `advance_ratio * size`.
///
/// Accepts every family name.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedMeasure {
    pub advance_ratio: f32,
    pub line_ratio: f32,
}

impl Default for FixedMeasure {
    fn default() -> Self {
        Self { advance_ratio: 0.5, line_ratio: 1.2 }
    }
}

impl GlyphMeasure for FixedMeasure {
    fn has_family(&self, _family: &str) -> bool {
        true
    }

    fn advance(&self, _family: &str, size: f32, _ch: char) -> f32 {
        size * self.advance_ratio
    }

    fn line_height(&self, _family: &str, size: f32) -> f32 {
        size * self.line_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_with_family_in_message() {
        let mut fonts = FontRegistry::new();
        let err = fonts.load("Calibri", b"not a font").unwrap_err();
        assert_eq!(err.family, "Calibri");
        assert!(err.to_string().contains("Calibri"));
        assert!(!fonts.has_family("Calibri"));
    }

    #[test]
    fn unknown_family_measures_as_empty() {
        let fonts = FontRegistry::new();
        assert_eq!(fonts.advance("missing", 16.0, 'a'), 0.0);
        assert!((fonts.line_height("missing", 10.0) - 12.0).abs() < 1e-6);
    }

    #[test]
    fn fixed_measure_scales_with_size() {
        let m = FixedMeasure::default();
        assert_eq!(m.advance("any", 20.0, 'W'), 10.0);
        assert!((m.line_height("any", 20.0) - 24.0).abs() < 1e-6);
    }
}
