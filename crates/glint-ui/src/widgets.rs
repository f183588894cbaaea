//! Stock elements.
//!
//! Each function returns a plain [`UiElement`]; style it through
//! [`UiElement::with_properties`] before inserting it.

use crate::capability::{Clickable, Draggable, Hoverable};
use crate::element::UiElement;
use crate::input::MouseInput;
use crate::text::TextModel;

/// Labelled element that runs `on_click` when pressed and released inside.
///
/// ```rust,ignore
/// let save = widgets::button("Save", |_| log::info!("saved"))
///     .with_properties(|p| {
///         p.set_size(85.0, 30.0).set_background_color(ColorRgba::white());
///     });
/// ```
pub fn button(label: impl Into<String>, on_click: impl FnMut(&MouseInput) + 'static) -> UiElement {
    UiElement::new()
        .hoverable(Hoverable::new())
        .clickable(Clickable::new().on_click(on_click))
        .with_text(TextModel::new(label))
}

/// Handle that follows the pointer while held, kept inside its container.
pub fn dragger() -> UiElement {
    UiElement::new().clickable(Clickable::new()).draggable(Draggable::new())
}

/// Static, word-wrapped text. Never consumes input.
pub fn text_label(text: impl Into<String>) -> UiElement {
    UiElement::new().with_text(TextModel::new(text))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glint_engine::coords::Vec2;

    use super::*;

    const ROOM: Vec2 = Vec2::new(640.0, 480.0);

    fn sized(el: UiElement, x: f32, y: f32, w: f32, h: f32) -> UiElement {
        el.with_properties(|p| {
            p.set_position(x, y).set_size(w, h);
        })
    }

    #[test]
    fn button_clicks_only_when_released_inside() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut btn = sized(button("Button", move |_| counter.set(counter.get() + 1)), 40.0, 85.0, 85.0, 30.0);
        let mut input = MouseInput::new();

        for (x, pressed) in [(50.0, true), (50.0, false), (50.0, true), (300.0, true), (300.0, false)] {
            input.advance(Vec2::new(x, 90.0), pressed);
            btn.propagate_input(&input, Vec2::zero(), ROOM);
        }

        assert_eq!(clicks.get(), 1);
        assert_eq!(btn.text_model().map(TextModel::text), Some("Button"));
    }

    #[test]
    fn button_hover_tracks_pointer() {
        let mut btn = sized(button("b", |_| {}), 0.0, 0.0, 10.0, 10.0);
        let mut input = MouseInput::new();

        input.advance(Vec2::new(5.0, 5.0), false);
        assert!(btn.propagate_input(&input, Vec2::zero(), ROOM));
        assert!(btn.is_hovered());

        input.advance(Vec2::new(50.0, 5.0), false);
        assert!(!btn.propagate_input(&input, Vec2::zero(), ROOM));
        assert!(!btn.is_hovered());
    }

    #[test]
    fn dragger_moves_with_pointer() {
        let mut handle = sized(dragger(), 295.0, 370.0, 50.0, 50.0);
        let mut input = MouseInput::new();

        for (x, y, pressed) in [(300.0, 375.0, true), (310.0, 360.0, true), (310.0, 360.0, false)] {
            input.advance(Vec2::new(x, y), pressed);
            handle.propagate_input(&input, Vec2::zero(), ROOM);
        }

        assert_eq!(handle.properties().position(), Vec2::new(305.0, 355.0));
        assert!(!handle.is_clicked());
    }

    #[test]
    fn text_label_is_transparent_to_input() {
        let mut label = sized(text_label("hello"), 0.0, 0.0, 100.0, 100.0);
        let mut input = MouseInput::new();
        input.advance(Vec2::new(10.0, 10.0), true);
        assert!(!label.propagate_input(&input, Vec2::zero(), ROOM));
    }
}
