//! Graphics collaborators consumed by the UI layer.
//!
//! The UI never talks to a graphics API directly. It sees a window through
//! [`WindowMetrics`], allocates offscreen composition targets through a
//! [`TargetAllocator`], and refers to images through [`TextureHandle`].
//! Headless implementations back the tests and scripted sessions; the wgpu
//! implementation backs real targets.

mod gpu;
mod target;
mod texture;
mod transform;
mod window;

pub use gpu::{GpuTarget, GpuTargets, GpuTargetsInit};
pub use target::{CompositionTarget, HeadlessTarget, HeadlessTargets, TargetAllocator, TargetStats};
pub use texture::TextureHandle;
pub use transform::Transform;
pub use window::{HeadlessWindow, WindowMetrics};
