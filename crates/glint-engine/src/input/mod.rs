//! Input subsystem.
//!
//! Public API is platform-agnostic. A window-system adapter (or a scripted
//! session) emits [`InputEvent`]s, which are folded into an [`InputState`]
//! holding what is down right now.

mod state;
mod types;

pub use state::InputState;
pub use types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};
