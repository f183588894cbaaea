use glint_engine::coords::Vec2;
use glint_engine::input::{InputState, MouseButton};

use crate::interface::InterfaceId;

/// Pointer snapshot handed to panels and elements, plus the control token.
///
/// At most one panel holds pointer control at a time. A panel claims it when
/// the pointer enters its bounds while nobody else holds it, and gives it up
/// once the pointer has left with the primary button released. While held,
/// other panels cannot claim it, so a drag that wanders outside its panel
/// keeps that panel as the receiver. With the button up, the manager releases
/// it when a newer panel covers the pointer.
#[derive(Debug, Clone, Default)]
pub struct MouseInput {
    current: Vec2,
    previous: Vec2,
    left_pressed: bool,
    left_was_pressed: bool,
    controller: Option<InterfaceId>,
}

impl MouseInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one tick from the engine's input state.
    ///
    /// A pointer that left the window keeps its last known position.
    pub fn sync(&mut self, state: &InputState) {
        let pos = state.pointer_pos.unwrap_or(self.current);
        self.advance(pos, state.button_down(MouseButton::Left));
    }

    /// Advances one tick with an explicit pointer position and button state.
    pub fn advance(&mut self, pos: Vec2, left_pressed: bool) {
        self.previous = self.current;
        self.current = pos;
        self.left_was_pressed = self.left_pressed;
        self.left_pressed = left_pressed;
    }

    #[inline]
    pub fn current_pos(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn previous_pos(&self) -> Vec2 {
        self.previous
    }

    /// Pointer movement since the previous tick.
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.current - self.previous
    }

    #[inline]
    pub fn is_left_button_pressed(&self) -> bool {
        self.left_pressed
    }

    /// Whether the button was down on the previous tick.
    #[inline]
    pub fn was_left_button_pressed(&self) -> bool {
        self.left_was_pressed
    }

    /// Pressed this tick and released on the previous one.
    #[inline]
    pub fn is_left_button_just_pressed(&self) -> bool {
        self.left_pressed && !self.left_was_pressed
    }

    // ── control token ──

    /// True when nobody holds control, or `id` already does.
    pub fn can_take_control(&self, id: InterfaceId) -> bool {
        self.controller.is_none_or(|holder| holder == id)
    }

    pub fn halt(&mut self, id: InterfaceId) {
        if self.controller != Some(id) {
            log::trace!("pointer control -> {id}");
            self.controller = Some(id);
        }
    }

    pub fn has_control(&self, id: InterfaceId) -> bool {
        self.controller == Some(id)
    }

    pub fn release(&mut self) {
        if let Some(holder) = self.controller.take() {
            log::trace!("pointer control released by {holder}");
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.controller.is_some()
    }

    pub fn controller(&self) -> Option<InterfaceId> {
        self.controller
    }
}

#[cfg(test)]
mod tests {
    use glint_engine::input::{InputEvent, MouseButtonState, PointerButtonEvent};

    use super::*;

    #[test]
    fn advance_tracks_previous_position() {
        let mut input = MouseInput::new();
        input.advance(Vec2::new(10.0, 10.0), false);
        input.advance(Vec2::new(14.0, 7.0), false);
        assert_eq!(input.previous_pos(), Vec2::new(10.0, 10.0));
        assert_eq!(input.displacement(), Vec2::new(4.0, -3.0));
    }

    #[test]
    fn just_pressed_only_on_the_first_pressed_tick() {
        let mut input = MouseInput::new();
        input.advance(Vec2::zero(), true);
        assert!(input.is_left_button_just_pressed());
        input.advance(Vec2::zero(), true);
        assert!(input.is_left_button_pressed());
        assert!(!input.is_left_button_just_pressed());
        input.advance(Vec2::zero(), false);
        assert!(input.was_left_button_pressed());
    }

    #[test]
    fn sync_reads_engine_state() {
        let mut state = InputState::default();
        state.apply_event(InputEvent::PointerMoved { x: 30.0, y: 40.0 });
        state.apply_event(InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 30.0,
            y: 40.0,
        }));

        let mut input = MouseInput::new();
        input.sync(&state);
        assert_eq!(input.current_pos(), Vec2::new(30.0, 40.0));
        assert!(input.is_left_button_pressed());

        state.apply_event(InputEvent::PointerLeft);
        input.sync(&state);
        assert_eq!(input.current_pos(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn control_token_is_exclusive() {
        let a = InterfaceId::from_raw(1);
        let b = InterfaceId::from_raw(2);
        let mut input = MouseInput::new();

        assert!(input.can_take_control(a));
        input.halt(a);
        assert!(input.has_control(a));
        assert!(input.can_take_control(a));
        assert!(!input.can_take_control(b));

        input.release();
        assert!(!input.is_controlled());
        assert!(input.can_take_control(b));
    }
}
