use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current pointer state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in window pixels, `None` while outside the window.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds one input event into the current state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Avoid stuck buttons when focus changes mid-press.
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some(Vec2::new(x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some(Vec2::new(x, y));
                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(&button);
                    }
                }
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state: MouseButtonState::Pressed, x, y })
    }

    fn release(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state: MouseButtonState::Released, x, y })
    }

    #[test]
    fn press_holds_button_and_moves_pointer() {
        let mut state = InputState::default();
        state.apply_event(press(MouseButton::Left, 4.0, 5.0));
        state.apply_event(press(MouseButton::Left, 4.0, 5.0));
        assert!(state.button_down(MouseButton::Left));
        assert_eq!(state.buttons_down.len(), 1);
        assert_eq!(state.pointer_pos, Some(Vec2::new(4.0, 5.0)));

        state.apply_event(release(MouseButton::Left, 6.0, 5.0));
        assert!(!state.button_down(MouseButton::Left));
        assert_eq!(state.pointer_pos, Some(Vec2::new(6.0, 5.0)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        state.apply_event(press(MouseButton::Left, 0.0, 0.0));
        state.apply_event(release(MouseButton::Right, 0.0, 0.0));
        assert!(state.button_down(MouseButton::Left));
        assert!(!state.button_down(MouseButton::Right));
    }

    #[test]
    fn focus_loss_releases_held_buttons() {
        let mut state = InputState::default();
        state.apply_event(press(MouseButton::Left, 0.0, 0.0));
        state.apply_event(InputEvent::Focused(false));
        assert!(!state.focused);
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn pointer_left_clears_position() {
        let mut state = InputState::default();
        state.apply_event(InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        state.apply_event(InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }
}
