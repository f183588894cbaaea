use glint_engine::coords::Vec2;
use glint_engine::input::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Pointer state for one frame of a scripted session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerSample {
    pub pos: Vec2,
    pub pressed: bool,
}

const fn at(x: f32, y: f32, pressed: bool) -> PointerSample {
    PointerSample { pos: Vec2::new(x, y), pressed }
}

/// Walks through the demo: clicks a grid button, drags the handle, opens and
/// closes the popup, then pans the world over empty space.
pub fn demo_session() -> Vec<PointerSample> {
    vec![
        // Button_0_0
        at(100.0, 195.0, false),
        at(100.0, 195.0, true),
        at(100.0, 195.0, false),
        // handle
        at(370.0, 495.0, false),
        at(370.0, 495.0, true),
        at(400.0, 480.0, true),
        at(450.0, 470.0, true),
        at(450.0, 470.0, false),
        // open the popup from the launcher
        at(500.0, 75.0, false),
        at(500.0, 75.0, true),
        at(500.0, 75.0, false),
        // close it again
        at(330.0, 70.0, false),
        at(330.0, 70.0, true),
        at(330.0, 70.0, false),
        // world pan
        at(1000.0, 800.0, false),
        at(1000.0, 800.0, true),
        at(1050.0, 820.0, true),
        at(1100.0, 840.0, true),
        at(1100.0, 840.0, false),
    ]
}

/// Events a platform adapter would emit to go from `prev` to `next`.
pub fn events_between(prev: Option<PointerSample>, next: PointerSample) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if prev.is_none_or(|p| p.pos != next.pos) {
        events.push(InputEvent::PointerMoved { x: next.pos.x, y: next.pos.y });
    }
    let was_pressed = prev.is_some_and(|p| p.pressed);
    if was_pressed != next.pressed {
        let state = if next.pressed { MouseButtonState::Pressed } else { MouseButtonState::Released };
        events.push(InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x: next.pos.x,
            y: next.pos.y,
        }));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_moves_the_pointer() {
        let events = events_between(None, at(1.0, 2.0, false));
        assert_eq!(events, vec![InputEvent::PointerMoved { x: 1.0, y: 2.0 }]);
    }

    #[test]
    fn still_pointer_only_reports_button_changes() {
        let events = events_between(Some(at(1.0, 2.0, false)), at(1.0, 2.0, true));
        assert!(matches!(
            events.as_slice(),
            [InputEvent::PointerButton(PointerButtonEvent { state: MouseButtonState::Pressed, .. })]
        ));
        assert!(events_between(Some(at(1.0, 2.0, true)), at(1.0, 2.0, true)).is_empty());
    }

    #[test]
    fn session_ends_released() {
        let session = demo_session();
        assert!(session.last().is_some_and(|s| !s.pressed));
    }
}
