use std::cell::Cell;
use std::rc::Rc;

/// Offscreen render destination a panel draws itself into before being
/// composited onto the screen.
///
/// Targets are released explicitly with [`CompositionTarget::clean_up`];
/// dropping one without cleaning it up leaks the backing resource until the
/// device goes away.
pub trait CompositionTarget {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn attachments(&self) -> u32;
    fn clean_up(&mut self);
}

/// Creates composition targets.
pub trait TargetAllocator {
    fn allocate(&self, width: u32, height: u32, attachments: u32) -> Box<dyn CompositionTarget>;
}

// ── headless ──────────────────────────────────────────────────────────────

/// Allocation counters shared by a [`HeadlessTargets`] and its targets.
#[derive(Debug, Default)]
pub struct TargetStats {
    allocated: Cell<u32>,
    released: Cell<u32>,
}

impl TargetStats {
    /// Total targets ever allocated.
    pub fn allocated(&self) -> u32 {
        self.allocated.get()
    }

    /// Total targets cleaned up.
    pub fn released(&self) -> u32 {
        self.released.get()
    }

    /// Targets allocated and not yet cleaned up.
    pub fn live(&self) -> u32 {
        self.allocated.get() - self.released.get()
    }
}

/// CPU-only allocator that only tracks sizes and lifetimes.
#[derive(Debug, Default, Clone)]
pub struct HeadlessTargets {
    stats: Rc<TargetStats>,
}

impl HeadlessTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Rc<TargetStats> {
        self.stats.clone()
    }
}

impl TargetAllocator for HeadlessTargets {
    fn allocate(&self, width: u32, height: u32, attachments: u32) -> Box<dyn CompositionTarget> {
        self.stats.allocated.set(self.stats.allocated.get() + 1);
        log::trace!("headless target allocated ({width}x{height}, {attachments} attachment(s))");
        Box::new(HeadlessTarget {
            width,
            height,
            attachments,
            released: false,
            stats: self.stats.clone(),
        })
    }
}

#[derive(Debug)]
pub struct HeadlessTarget {
    width: u32,
    height: u32,
    attachments: u32,
    released: bool,
    stats: Rc<TargetStats>,
}

impl CompositionTarget for HeadlessTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn attachments(&self) -> u32 {
        self.attachments
    }

    fn clean_up(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.stats.released.set(self.stats.released.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_track_live_targets() {
        let targets = HeadlessTargets::new();
        let stats = targets.stats();
        let mut a = targets.allocate(640, 480, 1);
        let _b = targets.allocate(10, 10, 2);
        assert_eq!(stats.live(), 2);
        a.clean_up();
        assert_eq!(stats.live(), 1);
        assert_eq!(stats.allocated(), 2);
    }

    #[test]
    fn clean_up_is_idempotent() {
        let targets = HeadlessTargets::new();
        let mut a = targets.allocate(1, 1, 1);
        a.clean_up();
        a.clean_up();
        assert_eq!(targets.stats().released(), 1);
    }
}
