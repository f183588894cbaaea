//! Draw stream types.
//!
//! Panels record what they look like into a [`DrawList`]; renderers consume
//! it in paint order (z-index, then insertion order).

mod cmd;
mod key;
mod list;

pub use cmd::{CompositeCmd, DrawCmd, GlyphRunCmd, PanelCmd};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
