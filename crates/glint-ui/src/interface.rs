use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use glint_engine::coords::{Rect, Vec2};
use glint_engine::gfx::{CompositionTarget, TextureHandle, Transform};
use glint_engine::scene::{DrawCmd, DrawList, PanelCmd, ZIndex};

use crate::context::UiContext;
use crate::element::UiElement;
use crate::input::MouseInput;
use crate::property::{Properties, PropertyKey, PropertyValue};

/// Color attachments of a panel's composition target.
const TARGET_ATTACHMENTS: u32 = 1;

// ── InterfaceId ───────────────────────────────────────────────────────────

/// Handle of a panel, unique within the manager that allocated it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct InterfaceId(u64);

impl InterfaceId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ui#{}", self.0)
    }
}

// ── Hooks ─────────────────────────────────────────────────────────────────

/// Per-panel behavior, supplied when the panel is registered.
///
/// Both hooks default to doing nothing, so `()` works for panels that are
/// purely declarative.
pub trait InterfaceHooks {
    /// Runs once per tick, after every element has updated.
    fn update(&mut self, _elements: &mut BTreeMap<String, UiElement>, _elapsed: f64) {}

    /// Runs for every property write on the panel, after the panel has
    /// reacted to it.
    fn on_property_change(&mut self, _key: PropertyKey, _value: &PropertyValue) {}
}

impl InterfaceHooks for () {}

// ── Renderable ────────────────────────────────────────────────────────────

/// Optional background image of a panel.
#[derive(Default)]
pub struct Renderable {
    texture: Option<Rc<dyn TextureHandle>>,
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderable")
            .field("texture", &self.texture.as_ref().map(|t| t.id()))
            .finish()
    }
}

impl Renderable {
    pub fn is_textured(&self) -> bool {
        self.texture.is_some()
    }

    pub fn texture(&self) -> Option<&Rc<dyn TextureHandle>> {
        self.texture.as_ref()
    }

    pub fn set_texture(&mut self, texture: Option<Rc<dyn TextureHandle>>) {
        self.texture = texture;
    }

    pub fn clean_up(&mut self) {
        self.texture = None;
    }
}

// ── UserInterface ─────────────────────────────────────────────────────────

type PendingChanges = Rc<RefCell<Vec<(PropertyKey, PropertyValue)>>>;

/// A panel: a rectangle on screen holding an element tree, drawn into its
/// own composition target and then composited.
///
/// Panels are created by [`crate::InterfaceManager::add`] and start hidden.
/// The composition target is allocated lazily, on the first element insert
/// or on a property write once elements exist, and is replaced on every
/// size change.
pub struct UserInterface {
    id: InterfaceId,
    name: String,
    ctx: UiContext,
    properties: Properties,
    pending: PendingChanges,
    elements: BTreeMap<String, UiElement>,
    target: Option<Box<dyn CompositionTarget>>,
    renderable: Renderable,
    visible: bool,
    hooks: Box<dyn InterfaceHooks>,
}

impl fmt::Debug for UserInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInterface")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("properties", &self.properties)
            .field("elements", &self.elements.keys().collect::<Vec<_>>())
            .field("target", &self.target_size())
            .field("renderable", &self.renderable)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl UserInterface {
    pub(crate) fn new(
        id: InterfaceId,
        name: impl Into<String>,
        ctx: UiContext,
        hooks: Box<dyn InterfaceHooks>,
    ) -> Self {
        let pending = PendingChanges::default();
        let sink = pending.clone();
        let mut properties = Properties::new();
        properties.set_listener(move |key, value| sink.borrow_mut().push((key, value.clone())));

        Self {
            id,
            name: name.into(),
            ctx,
            properties,
            pending,
            elements: BTreeMap::new(),
            target: None,
            renderable: Renderable::default(),
            visible: false,
            hooks,
        }
    }

    pub fn id(&self) -> InterfaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Only the manager flips visibility, so it can release pointer control
    /// on hide.
    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // ── properties ──

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Write access to the panel's properties.
    ///
    /// Writes are broadcast in order when the returned editor is dropped:
    /// the panel resizes its composition target first, then the hooks see
    /// the change.
    ///
    /// ```rust,ignore
    /// ui.properties_mut().set_size(640.0, 480.0).set_position(50.0, 100.0);
    /// ```
    pub fn properties_mut(&mut self) -> PropertyEditor<'_> {
        PropertyEditor { ui: self }
    }

    fn flush_property_changes(&mut self) {
        let changes: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (key, value) in changes {
            self.broadcast_property_changed(key, &value);
        }
    }

    fn broadcast_property_changed(&mut self, key: PropertyKey, value: &PropertyValue) {
        log::trace!("{} `{}`: {key} = {value:?}", self.id, self.name);

        if key == PropertyKey::Size {
            if let (Some(target), PropertyValue::Vec2(size)) = (self.target.as_mut(), value) {
                target.clean_up();
                let size = *size;
                self.target = Some(self.allocate_target(size));
            }
        }
        if !self.elements.is_empty() && self.target.is_none() {
            let size = self.properties.size();
            self.target = Some(self.allocate_target(size));
        }

        self.hooks.on_property_change(key, value);
    }

    fn allocate_target(&self, size: Vec2) -> Box<dyn CompositionTarget> {
        let (width, height) = (size.x as u32, size.y as u32);
        log::trace!("{} `{}`: composition target {width}x{height}", self.id, self.name);
        self.ctx.targets().allocate(width, height, TARGET_ATTACHMENTS)
    }

    // ── elements ──

    /// Inserts `element` under `id`, returning the element it replaced.
    ///
    /// Text models in the inserted tree are laid out immediately.
    pub fn add_element(&mut self, id: impl Into<String>, mut element: UiElement) -> Option<UiElement> {
        let id = id.into();
        element.attach(&id, self.id);
        element.precompute_text(self.ctx.glyphs());

        let replaced = self.elements.insert(id, element).map(UiElement::detached);
        if self.target.is_none() {
            let size = self.properties.size();
            self.target = Some(self.allocate_target(size));
        }
        replaced
    }

    pub fn remove_element(&mut self, id: &str) -> Option<UiElement> {
        self.elements.remove(id).map(UiElement::detached)
    }

    pub fn element(&self, id: &str) -> Option<&UiElement> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut UiElement> {
        self.elements.get_mut(id)
    }

    /// Top-level elements in identifier order.
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = (&str, &UiElement)> {
        self.elements.iter().map(|(id, el)| (id.as_str(), el))
    }

    pub fn target(&self) -> Option<&dyn CompositionTarget> {
        self.target.as_deref()
    }

    pub fn target_size(&self) -> Option<(u32, u32)> {
        self.target.as_ref().map(|t| (t.width(), t.height()))
    }

    // ── rendering ──

    pub fn is_textured(&self) -> bool {
        self.renderable.is_textured()
    }

    pub fn background_texture(&self) -> Option<&Rc<dyn TextureHandle>> {
        self.renderable.texture()
    }

    pub fn set_background_texture(&mut self, texture: Option<Rc<dyn TextureHandle>>) {
        self.renderable.set_texture(texture);
    }

    /// Scale and displacement placing this panel on screen in device
    /// coordinates, computed from the current window size.
    pub fn transform(&self) -> Transform {
        Transform::from_pixel_rect(self.properties.bounds(), self.ctx.window().viewport())
    }

    /// Records the panel content in panel-local coordinates: what gets drawn
    /// into the composition target.
    pub fn record(&self, list: &mut DrawList) {
        let props = &self.properties;
        list.push(
            ZIndex::new(0),
            DrawCmd::Panel(PanelCmd {
                rect: Rect::from_origin_size(Vec2::zero(), props.size()),
                fill: props.background_color(),
                corner_radius: props.corner_radius(),
                border_width: props.border_width(),
                border_color: props.border_color(),
            }),
        );
        for element in self.elements.values() {
            element.record(list, Vec2::zero(), ZIndex::new(1));
        }
    }

    // ── per tick ──

    /// Routes one pointer tick through the element tree and arbitrates
    /// pointer control. Returns whether an element consumed the pointer.
    pub fn propagate_input(&mut self, input: &mut MouseInput) -> bool {
        let bounds = self.properties.bounds();
        let inside = bounds.contains_inclusive(input.current_pos());

        let caught = self
            .elements
            .values_mut()
            .rev()
            .any(|element| element.propagate_input(input, bounds.origin, bounds.size));

        if inside && input.can_take_control(self.id) {
            input.halt(self.id);
        } else if !inside && input.has_control(self.id) && !input.is_left_button_pressed() {
            input.release();
        }

        caught
    }

    /// Whether `pos` falls on this panel, edges included.
    pub fn contains(&self, pos: Vec2) -> bool {
        self.properties.bounds().contains_inclusive(pos)
    }

    /// Ends hover on every element, for when a panel drawn above this one
    /// takes the pointer.
    pub fn pointer_left(&mut self, input: &MouseInput) {
        for element in self.elements.values_mut() {
            element.pointer_left(input);
        }
    }

    /// Updates elements, refreshes edited text, then runs the update hook.
    pub fn update_internal(&mut self, elapsed: f64) {
        for element in self.elements.values_mut() {
            element.update_internal(elapsed);
            element.refresh_text(self.ctx.glyphs());
        }
        self.hooks.update(&mut self.elements, elapsed);
    }

    /// Releases the background texture, every element and the composition
    /// target.
    pub fn clean_up(&mut self) {
        self.renderable.clean_up();
        for element in self.elements.values_mut() {
            element.clean_up();
        }
        self.elements.clear();
        if let Some(mut target) = self.target.take() {
            target.clean_up();
        }
        self.pending.borrow_mut().clear();
    }
}

// ── PropertyEditor ────────────────────────────────────────────────────────

/// Mutable view of a panel's properties; broadcasts the writes on drop.
pub struct PropertyEditor<'a> {
    ui: &'a mut UserInterface,
}

impl Deref for PropertyEditor<'_> {
    type Target = Properties;

    fn deref(&self) -> &Properties {
        &self.ui.properties
    }
}

impl DerefMut for PropertyEditor<'_> {
    fn deref_mut(&mut self) -> &mut Properties {
        &mut self.ui.properties
    }
}

impl Drop for PropertyEditor<'_> {
    fn drop(&mut self) {
        self.ui.flush_property_changes();
    }
}
