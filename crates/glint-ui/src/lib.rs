//! Glint UI: screen-space panels of interactive elements on top of
//! `glint-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use glint_ui::prelude::*;
//!
//! let mut manager = InterfaceManager::new(UiContext::headless(1280, 960));
//! let panel = manager.add("demo", ());
//! if let Some(ui) = manager.get_mut(panel) {
//!     ui.properties_mut()
//!         .set_size(640.0, 480.0)
//!         .set_position(50.0, 100.0)
//!         .set_corner_radius(10.0);
//!     ui.add_element("ok", widgets::button("OK", |_| log::info!("ok")));
//! }
//! manager.show(panel);
//!
//! // Each frame:
//! manager.propagate_input(&input_state);
//! manager.update(dt);
//! manager.record(&mut draw_list);
//! ```
//!
//! # Input
//!
//! A pointer tick visits the visible panels newest first, so the panel drawn
//! on top sees the pointer first; during a drag the panel holding pointer
//! control goes first instead. Inside a panel, elements are tried in
//! descending identifier order and the first one that consumes the pointer
//! stops the walk. Hover and click routines are plain
//! state machines ([`Hoverable`], [`Clickable`]) an element opts into.

pub mod capability;
pub mod command;
pub mod context;
pub mod element;
pub mod input;
pub mod interface;
pub mod manager;
pub mod property;
pub mod text;
pub mod widgets;

pub use capability::{Clickable, Draggable, Hoverable};
pub use command::{CommandQueue, UiCommand};
pub use context::UiContext;
pub use element::{ElementOwner, UiElement};
pub use input::MouseInput;
pub use interface::{InterfaceHooks, InterfaceId, PropertyEditor, UserInterface};
pub use manager::InterfaceManager;
pub use property::{Properties, PropertyError, PropertyKey, PropertyValue};
pub use text::TextModel;

/// Everything needed to build panels: import this in interface modules.
pub mod prelude {
    pub use crate::capability::{ClickEvent, Clickable, Draggable, HoverEvent, Hoverable};
    pub use crate::command::{CommandQueue, UiCommand};
    pub use crate::context::UiContext;
    pub use crate::element::{ElementOwner, UiElement};
    pub use crate::input::MouseInput;
    pub use crate::interface::{InterfaceHooks, InterfaceId, UserInterface};
    pub use crate::manager::InterfaceManager;
    pub use crate::property::{Properties, PropertyError, PropertyKey, PropertyValue};
    pub use crate::text::TextModel;
    pub use crate::widgets;

    // Engine primitives everyone needs.
    pub use glint_engine::coords::{ColorRgba, Rect, Vec2};
    pub use glint_engine::scene::DrawList;
}
