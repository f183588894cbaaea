use glint_engine::text::{layout_text, GlyphMeasure, TextLayout};

use crate::property::Properties;

/// Text an element displays, plus its precomputed glyph layout.
///
/// The layout is rebuilt by [`TextModel::precompute`] from the owning
/// element's font properties. Editing the text marks it stale until then, and
/// [`TextModel::needs_layout`] also reports a layout made for another width,
/// font size or family.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextModel {
    text: String,
    layout: TextLayout,
    stale: bool,
    laid_out_for: Option<LayoutInputs>,
}

/// Element properties a layout depends on.
#[derive(Debug, Clone, PartialEq)]
struct LayoutInputs {
    family: String,
    font_size: f32,
    width: f32,
}

impl LayoutInputs {
    fn of(props: &Properties) -> Self {
        Self { family: props.font_family(), font_size: props.font_size(), width: props.size().x }
    }
}

impl TextModel {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), layout: TextLayout::default(), stale: true, laid_out_for: None }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.stale = true;
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Stale, or laid out for different font or width properties than `props`.
    pub fn needs_layout(&self, props: &Properties) -> bool {
        self.stale || self.laid_out_for.as_ref().is_none_or(|inputs| *inputs != LayoutInputs::of(props))
    }

    /// Lays the text out with the family, size and width found in `props`.
    ///
    /// Lines wrap at the element width when it is positive. An unknown
    /// family leaves an empty layout.
    pub fn precompute(&mut self, measure: &dyn GlyphMeasure, props: &Properties) {
        self.stale = false;
        let inputs = LayoutInputs::of(props);

        if !measure.has_family(&inputs.family) {
            log::warn!("font family `{}` is not loaded; `{}` will not be drawn", inputs.family, self.text);
            self.layout = TextLayout::default();
        } else {
            let max_width = (inputs.width > 0.0).then_some(inputs.width);
            self.layout = layout_text(measure, &self.text, &inputs.family, inputs.font_size, max_width);
        }
        self.laid_out_for = Some(inputs);
    }

    pub fn clean_up(&mut self) {
        self.layout = TextLayout::default();
        self.stale = true;
        self.laid_out_for = None;
    }
}

#[cfg(test)]
mod tests {
    use glint_engine::text::FixedMeasure;

    use super::*;

    struct NoFonts;

    impl GlyphMeasure for NoFonts {
        fn has_family(&self, _family: &str) -> bool {
            false
        }

        fn advance(&self, _family: &str, _size: f32, _ch: char) -> f32 {
            0.0
        }

        fn line_height(&self, _family: &str, _size: f32) -> f32 {
            0.0
        }
    }

    #[test]
    fn precompute_wraps_at_element_width() {
        let mut props = Properties::new();
        props.set_font_size(10.0).set_size(60.0, 40.0);

        // 5px per glyph: "hello world" fits in 55px, "again" wraps.
        let mut model = TextModel::new("hello world again");
        assert!(model.is_stale());
        model.precompute(&FixedMeasure::default(), &props);

        assert!(!model.is_stale());
        assert_eq!(model.layout().line_count, 2);
        assert_eq!(model.layout().glyphs.len(), 15);
    }

    #[test]
    fn zero_width_means_no_wrapping() {
        let mut props = Properties::new();
        props.set_font_size(10.0);

        let mut model = TextModel::new("one two three four");
        model.precompute(&FixedMeasure::default(), &props);
        assert_eq!(model.layout().line_count, 1);
    }

    #[test]
    fn unknown_family_yields_empty_layout() {
        let props = Properties::new();
        let mut model = TextModel::new("invisible");
        model.precompute(&NoFonts, &props);
        assert!(model.layout().glyphs.is_empty());
        assert!(!model.is_stale());
    }

    #[test]
    fn resizing_or_refonting_needs_a_new_layout() {
        let mut props = Properties::new();
        props.set_font_size(10.0).set_size(60.0, 40.0);
        let mut model = TextModel::new("hello world again");
        model.precompute(&FixedMeasure::default(), &props);
        assert!(!model.needs_layout(&props));

        props.set_position(5.0, 5.0);
        assert!(!model.needs_layout(&props));

        props.set_size(200.0, 40.0);
        assert!(model.needs_layout(&props));
        model.precompute(&FixedMeasure::default(), &props);
        assert_eq!(model.layout().line_count, 1);

        props.set_font_size(20.0);
        assert!(model.needs_layout(&props));
        model.precompute(&FixedMeasure::default(), &props);
        props.set_font_family("Calibri");
        assert!(model.needs_layout(&props));
    }

    #[test]
    fn set_text_marks_stale() {
        let mut model = TextModel::new("a");
        model.precompute(&FixedMeasure::default(), &Properties::new());
        model.set_text("b");
        assert!(model.is_stale());
        assert_eq!(model.text(), "b");
    }
}
