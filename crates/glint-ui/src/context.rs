use std::fmt;
use std::rc::Rc;

use glint_engine::gfx::{HeadlessTargets, HeadlessWindow, TargetAllocator, WindowMetrics};
use glint_engine::text::{FixedMeasure, GlyphMeasure};

/// Collaborators every panel needs: the window it is shown in, the target
/// allocator for its offscreen surface, and glyph metrics for its text.
///
/// Cheap to clone; the manager hands a clone to each panel it creates.
#[derive(Clone)]
pub struct UiContext {
    window: Rc<dyn WindowMetrics>,
    targets: Rc<dyn TargetAllocator>,
    glyphs: Rc<dyn GlyphMeasure>,
}

impl fmt::Debug for UiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiContext")
            .field("window", &(self.window.width(), self.window.height()))
            .finish_non_exhaustive()
    }
}

impl UiContext {
    pub fn new(
        window: Rc<dyn WindowMetrics>,
        targets: Rc<dyn TargetAllocator>,
        glyphs: Rc<dyn GlyphMeasure>,
    ) -> Self {
        Self { window, targets, glyphs }
    }

    /// Context over a [`HeadlessWindow`] of the given size, headless targets
    /// and fixed glyph metrics.
    pub fn headless(width: u32, height: u32) -> Self {
        Self::new(
            Rc::new(HeadlessWindow::new(width, height)),
            Rc::new(HeadlessTargets::new()),
            Rc::new(FixedMeasure::default()),
        )
    }

    pub fn window(&self) -> &dyn WindowMetrics {
        self.window.as_ref()
    }

    pub fn targets(&self) -> &dyn TargetAllocator {
        self.targets.as_ref()
    }

    pub fn glyphs(&self) -> &dyn GlyphMeasure {
        self.glyphs.as_ref()
    }
}
