//! Pointer-driven state machines an element can opt into.
//!
//! Both routines must run every tick, whether or not the pointer is over the
//! element, so exits and releases are observed.

use std::fmt;

use crate::input::MouseInput;

/// Callback fired on a hover or click transition.
pub type PointerCallback = Box<dyn FnMut(&MouseInput)>;

fn fire(callback: &mut Option<PointerCallback>, input: &MouseInput) {
    if let Some(f) = callback.as_mut() {
        f(input);
    }
}

// ── Hover ─────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HoverEvent {
    Enter,
    Inside,
    Exit,
}

/// Enter/inside/exit tracking.
#[derive(Default)]
pub struct Hoverable {
    hovered: bool,
    on_enter: Option<PointerCallback>,
    on_inside: Option<PointerCallback>,
    on_exit: Option<PointerCallback>,
}

impl fmt::Debug for Hoverable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hoverable").field("hovered", &self.hovered).finish_non_exhaustive()
    }
}

impl Hoverable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(mut self, f: impl FnMut(&MouseInput) + 'static) -> Self {
        self.on_enter = Some(Box::new(f));
        self
    }

    /// Fired on every tick the pointer stays inside after entering.
    pub fn on_inside(mut self, f: impl FnMut(&MouseInput) + 'static) -> Self {
        self.on_inside = Some(Box::new(f));
        self
    }

    pub fn on_exit(mut self, f: impl FnMut(&MouseInput) + 'static) -> Self {
        self.on_exit = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Runs one tick. At most one transition fires.
    pub fn routine(&mut self, input: &MouseInput, inside: bool) -> Option<HoverEvent> {
        match (self.hovered, inside) {
            (true, false) => {
                self.hovered = false;
                fire(&mut self.on_exit, input);
                Some(HoverEvent::Exit)
            }
            (true, true) => {
                fire(&mut self.on_inside, input);
                Some(HoverEvent::Inside)
            }
            (false, true) => {
                self.hovered = true;
                fire(&mut self.on_enter, input);
                Some(HoverEvent::Enter)
            }
            (false, false) => None,
        }
    }

    pub fn clean_up(&mut self) {
        self.hovered = false;
        self.on_enter = None;
        self.on_inside = None;
        self.on_exit = None;
    }
}

// ── Click ─────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClickEvent {
    Start,
    Hold,
    End,
}

/// Press/hold/release tracking.
///
/// A click starts on a fresh press inside the element and is held until the
/// button is released, wherever the pointer is by then.
#[derive(Default)]
pub struct Clickable {
    clicked: bool,
    on_start: Option<PointerCallback>,
    on_hold: Option<PointerCallback>,
    on_end: Option<PointerCallback>,
    on_click: Option<PointerCallback>,
}

impl fmt::Debug for Clickable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clickable").field("clicked", &self.clicked).finish_non_exhaustive()
    }
}

impl Clickable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_start(mut self, f: impl FnMut(&MouseInput) + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    pub fn on_hold(mut self, f: impl FnMut(&MouseInput) + 'static) -> Self {
        self.on_hold = Some(Box::new(f));
        self
    }

    pub fn on_end(mut self, f: impl FnMut(&MouseInput) + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    /// Fired right after `on_end` when the release happens inside the
    /// element.
    pub fn on_click(mut self, f: impl FnMut(&MouseInput) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn is_clicked(&self) -> bool {
        self.clicked
    }

    pub fn set_clicked(&mut self, clicked: bool) {
        self.clicked = clicked;
    }

    /// Runs one tick. At most one transition fires.
    pub fn routine(&mut self, input: &MouseInput, inside: bool) -> Option<ClickEvent> {
        let pressed = input.is_left_button_pressed();

        if self.clicked && !pressed {
            self.clicked = false;
            fire(&mut self.on_end, input);
            if inside {
                fire(&mut self.on_click, input);
            }
            return Some(ClickEvent::End);
        }

        if self.clicked {
            fire(&mut self.on_hold, input);
            return Some(ClickEvent::Hold);
        }

        if inside && input.is_left_button_just_pressed() {
            self.clicked = true;
            fire(&mut self.on_start, input);
            return Some(ClickEvent::Start);
        }

        None
    }

    pub fn clean_up(&mut self) {
        self.clicked = false;
        self.on_start = None;
        self.on_hold = None;
        self.on_end = None;
        self.on_click = None;
    }
}

// ── Drag ──────────────────────────────────────────────────────────────────

/// Moves the element by the pointer displacement while its click is held.
///
/// Requires a [`Clickable`] on the same element.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Draggable {
    /// Keep the element fully inside its container.
    pub clamp_to_container: bool,
}

impl Default for Draggable {
    fn default() -> Self {
        Self { clamp_to_container: true }
    }
}

impl Draggable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unclamped() -> Self {
        Self { clamp_to_container: false }
    }
}
