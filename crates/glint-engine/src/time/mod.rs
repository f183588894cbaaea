//! Frame timing.
//!
//! One [`FrameClock`] per update loop; `advance()` once per frame yields the
//! elapsed time handed to `update` passes.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
