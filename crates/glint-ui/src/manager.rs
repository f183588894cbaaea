use glint_engine::coords::Vec2;
use glint_engine::input::InputState;
use glint_engine::scene::{CompositeCmd, DrawCmd, DrawList, ZIndex};

use crate::command::{CommandQueue, UiCommand};
use crate::context::UiContext;
use crate::input::MouseInput;
use crate::interface::{InterfaceHooks, InterfaceId, UserInterface};

/// Owns every panel, the pointer router and the command queue.
///
/// Per frame: [`propagate_input`](Self::propagate_input), then
/// [`update`](Self::update), then [`record`](Self::record).
///
/// ```rust,ignore
/// let mut manager = InterfaceManager::new(UiContext::headless(1280, 960));
/// let demo = manager.add("demo", ());
/// if let Some(ui) = manager.get_mut(demo) {
///     ui.properties_mut().set_size(640.0, 480.0);
/// }
/// manager.show(demo);
/// ```
#[derive(Debug)]
pub struct InterfaceManager {
    ctx: UiContext,
    interfaces: Vec<UserInterface>,
    next_id: u64,
    mouse: MouseInput,
    commands: CommandQueue,
}

impl InterfaceManager {
    pub fn new(ctx: UiContext) -> Self {
        Self {
            ctx,
            interfaces: Vec::new(),
            next_id: 1,
            mouse: MouseInput::new(),
            commands: CommandQueue::new(),
        }
    }

    pub fn context(&self) -> &UiContext {
        &self.ctx
    }

    /// A handle callbacks can capture to request show/hide/toggle.
    pub fn commands(&self) -> CommandQueue {
        self.commands.clone()
    }

    pub fn mouse(&self) -> &MouseInput {
        &self.mouse
    }

    // ── registry ──

    /// Registers a new, hidden panel.
    pub fn add(&mut self, name: impl Into<String>, hooks: impl InterfaceHooks + 'static) -> InterfaceId {
        let id = InterfaceId::from_raw(self.next_id);
        self.next_id += 1;

        let ui = UserInterface::new(id, name, self.ctx.clone(), Box::new(hooks));
        log::debug!("registered {id} `{}`", ui.name());
        self.interfaces.push(ui);
        id
    }

    /// Cleans up and drops a panel, releasing pointer control if it held it.
    pub fn remove(&mut self, id: InterfaceId) -> bool {
        let Some(index) = self.interfaces.iter().position(|ui| ui.id() == id) else {
            return false;
        };
        if self.mouse.has_control(id) {
            self.mouse.release();
        }
        let mut ui = self.interfaces.remove(index);
        ui.clean_up();
        log::debug!("removed {id} `{}`", ui.name());
        true
    }

    pub fn get(&self, id: InterfaceId) -> Option<&UserInterface> {
        self.interfaces.iter().find(|ui| ui.id() == id)
    }

    pub fn get_mut(&mut self, id: InterfaceId) -> Option<&mut UserInterface> {
        self.interfaces.iter_mut().find(|ui| ui.id() == id)
    }

    /// Id of the first panel registered under `name`.
    pub fn by_name(&self, name: &str) -> Option<InterfaceId> {
        self.interfaces.iter().find(|ui| ui.name() == name).map(UserInterface::id)
    }

    /// Panels in registration order.
    pub fn interfaces(&self) -> impl DoubleEndedIterator<Item = &UserInterface> {
        self.interfaces.iter()
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    // ── visibility ──

    pub fn show(&mut self, id: InterfaceId) -> bool {
        let Some(ui) = self.get_mut(id) else {
            log::warn!("show: unknown {id}");
            return false;
        };
        if !ui.is_visible() {
            ui.set_visible(true);
            log::debug!("showing {id} `{}`", ui.name());
        }
        true
    }

    /// Hides a panel; if it held pointer control, control is released.
    pub fn hide(&mut self, id: InterfaceId) -> bool {
        let Some(ui) = self.get_mut(id) else {
            log::warn!("hide: unknown {id}");
            return false;
        };
        if ui.is_visible() {
            ui.set_visible(false);
            log::debug!("hiding {id} `{}`", ui.name());
        }
        if self.mouse.has_control(id) {
            self.mouse.release();
        }
        true
    }

    pub fn toggle(&mut self, id: InterfaceId) -> bool {
        match self.get(id).map(UserInterface::is_visible) {
            Some(true) => self.hide(id),
            Some(false) => self.show(id),
            None => {
                log::warn!("toggle: unknown {id}");
                false
            }
        }
    }

    /// Applies queued commands in push order.
    fn apply_commands(&mut self) {
        for command in self.commands.drain() {
            match command {
                UiCommand::Show(id) => self.show(id),
                UiCommand::Hide(id) => self.hide(id),
                UiCommand::Toggle(id) => self.toggle(id),
            };
        }
    }

    // ── per frame ──

    /// Feeds one frame of engine input to the visible panels.
    ///
    /// Returns whether an element consumed the pointer.
    pub fn propagate_input(&mut self, state: &InputState) -> bool {
        self.mouse.sync(state);
        self.dispatch()
    }

    /// Same as [`propagate_input`](Self::propagate_input) with an explicit
    /// pointer sample, for scripted sessions.
    pub fn propagate_pointer(&mut self, pos: Vec2, left_pressed: bool) -> bool {
        self.mouse.advance(pos, left_pressed);
        self.dispatch()
    }

    /// Visible panels are visited newest first, so the one drawn on top sees
    /// the pointer first. While a drag is in flight, up to its release tick,
    /// the panel holding pointer control goes first instead. Otherwise a newer
    /// panel under the pointer takes control from an older holder, which gets
    /// its hovers ended. Stops at the first panel whose elements consumed the
    /// pointer or that holds pointer control after its pass.
    fn dispatch(&mut self) -> bool {
        let mut order: Vec<usize> =
            (0..self.interfaces.len()).rev().filter(|&i| self.interfaces[i].is_visible()).collect();
        let controller = self.mouse.controller();
        let holder = order.iter().position(|&i| Some(self.interfaces[i].id()) == controller);

        if let Some(pos) = holder {
            let dragging = self.mouse.was_left_button_pressed();
            let pointer = self.mouse.current_pos();
            if dragging {
                let index = order.remove(pos);
                order.insert(0, index);
            } else if order[..pos].iter().any(|&i| self.interfaces[i].contains(pointer)) {
                let index = order.remove(pos);
                self.mouse.release();
                self.interfaces[index].pointer_left(&self.mouse);
                log::debug!("{} covered, pointer control handed over", self.interfaces[index].id());
            }
        }

        let mut caught = false;
        for index in order {
            let ui = &mut self.interfaces[index];
            caught = ui.propagate_input(&mut self.mouse);
            if caught || self.mouse.has_control(ui.id()) {
                break;
            }
        }
        self.apply_commands();
        caught
    }

    pub fn update(&mut self, elapsed: f64) {
        for ui in self.interfaces.iter_mut().filter(|ui| ui.is_visible()) {
            ui.update_internal(elapsed);
        }
        self.apply_commands();
    }

    /// Records one composite per visible panel, oldest at the bottom.
    pub fn record(&self, list: &mut DrawList) {
        let visible = self.interfaces.iter().filter(|ui| ui.is_visible());
        for (layer, ui) in (0i32..).zip(visible) {
            list.push(
                ZIndex::new(layer),
                DrawCmd::Composite(CompositeCmd {
                    source: ui.id().raw(),
                    target_size: ui.target_size().unwrap_or((0, 0)),
                    transform: ui.transform(),
                    corner_radius: ui.properties().corner_radius(),
                }),
            );
        }
    }

    /// Whether a panel holds the pointer. World input (camera drag, picking)
    /// should stand down while this is true.
    pub fn is_pointer_captured(&self) -> bool {
        self.mouse.is_controlled()
    }

    pub fn clean_up(&mut self) {
        for ui in self.interfaces.iter_mut() {
            ui.clean_up();
        }
        self.interfaces.clear();
        self.mouse.release();
        self.commands.drain();
    }
}
