use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::interface::InterfaceId;

/// Deferred request to the interface manager.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UiCommand {
    Show(InterfaceId),
    Hide(InterfaceId),
    Toggle(InterfaceId),
}

/// Shared FIFO that element callbacks push manager requests into.
///
/// Callbacks run while the manager is mid-dispatch, so they cannot touch it
/// directly. They capture a clone of this queue instead; the manager drains
/// it once its current pass is over.
///
/// ```rust,ignore
/// let commands = manager.commands();
/// let settings = manager.by_name("settings").unwrap();
/// let open = widgets::button("Settings", move |_| commands.show(settings));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    inner: Rc<RefCell<VecDeque<UiCommand>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, command: UiCommand) {
        self.inner.borrow_mut().push_back(command);
    }

    pub fn show(&self, id: InterfaceId) {
        self.push(UiCommand::Show(id));
    }

    pub fn hide(&self, id: InterfaceId) {
        self.push(UiCommand::Hide(id));
    }

    pub fn toggle(&self, id: InterfaceId) {
        self.push(UiCommand::Toggle(id));
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Takes every queued command, oldest first.
    pub fn drain(&self) -> Vec<UiCommand> {
        self.inner.borrow_mut().drain(..).collect()
    }
}
