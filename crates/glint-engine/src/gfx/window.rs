use std::cell::Cell;

use crate::coords::Viewport;

/// Current drawable size of a window, in pixels.
pub trait WindowMetrics {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn viewport(&self) -> Viewport {
        Viewport::new(self.width() as f32, self.height() as f32)
    }
}

/// Window stand-in for headless sessions and tests.
///
/// Resizable through a shared reference so every holder of an `Rc` sees the
/// new size on its next read.
#[derive(Debug)]
pub struct HeadlessWindow {
    width: Cell<u32>,
    height: Cell<u32>,
}

impl HeadlessWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width: Cell::new(width), height: Cell::new(height) }
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.width.set(width);
        self.height.set(height);
    }
}

impl WindowMetrics for HeadlessWindow {
    fn width(&self) -> u32 {
        self.width.get()
    }

    fn height(&self) -> u32 {
        self.height.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_is_visible_through_shared_reference() {
        let window = std::rc::Rc::new(HeadlessWindow::new(800, 600));
        let alias = window.clone();
        alias.resize(1280, 960);
        assert_eq!(window.viewport(), Viewport::new(1280.0, 960.0));
    }
}
