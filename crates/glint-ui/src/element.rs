use std::collections::BTreeMap;
use std::fmt;

use glint_engine::coords::Vec2;
use glint_engine::scene::{DrawCmd, DrawList, GlyphRunCmd, PanelCmd, ZIndex};
use glint_engine::text::GlyphMeasure;

use crate::capability::{ClickEvent, Clickable, Draggable, Hoverable};
use crate::input::MouseInput;
use crate::interface::InterfaceId;
use crate::property::Properties;
use crate::text::TextModel;

/// Per-tick behavior hook, given the element's properties and elapsed
/// seconds.
pub type UpdateHook = Box<dyn FnMut(&mut Properties, f64)>;

/// Where an element sits in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementOwner {
    /// Not attached to any panel yet.
    Detached,
    /// Top-level element of a panel.
    Interface(InterfaceId),
    /// Child of another element. `container` is the panel at the root of
    /// the tree, if the tree is attached.
    Element {
        container: Option<InterfaceId>,
        parent: String,
    },
}

impl ElementOwner {
    pub fn container(&self) -> Option<InterfaceId> {
        match self {
            ElementOwner::Detached => None,
            ElementOwner::Interface(id) => Some(*id),
            ElementOwner::Element { container, .. } => *container,
        }
    }

    /// Identifier of the parent element, `None` for top-level elements.
    pub fn parent(&self) -> Option<&str> {
        match self {
            ElementOwner::Element { parent, .. } => Some(parent),
            _ => None,
        }
    }
}

/// A node of a panel's element tree.
///
/// Positions are relative to the owner: a top-level element is placed in
/// its panel's space, a child in its parent element's space. Children are
/// keyed by identifier and hit-tested in descending key order, so the
/// lexicographically greatest identifier has input priority.
///
/// ```rust,ignore
/// let handle = UiElement::new()
///     .with_properties(|p| {
///         p.set_size(50.0, 50.0).set_corner_radius(25.0);
///     })
///     .clickable(Clickable::new())
///     .draggable(Draggable::new());
/// ui.add_element("handle", handle);
/// ```
pub struct UiElement {
    id: String,
    owner: ElementOwner,
    properties: Properties,
    hover: Option<Hoverable>,
    click: Option<Clickable>,
    drag: Option<Draggable>,
    text: Option<TextModel>,
    children: BTreeMap<String, UiElement>,
    on_update: Option<UpdateHook>,
}

impl Default for UiElement {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UiElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiElement")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("properties", &self.properties)
            .field("hover", &self.hover)
            .field("click", &self.click)
            .field("drag", &self.drag)
            .field("text", &self.text)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

impl UiElement {
    pub fn new() -> Self {
        Self {
            id: String::new(),
            owner: ElementOwner::Detached,
            properties: Properties::new(),
            hover: None,
            click: None,
            drag: None,
            text: None,
            children: BTreeMap::new(),
            on_update: None,
        }
    }

    // ── builder ──

    pub fn with_properties(mut self, f: impl FnOnce(&mut Properties)) -> Self {
        f(&mut self.properties);
        self
    }

    pub fn hoverable(mut self, hover: Hoverable) -> Self {
        self.hover = Some(hover);
        self
    }

    pub fn clickable(mut self, click: Clickable) -> Self {
        self.click = Some(click);
        self
    }

    pub fn draggable(mut self, drag: Draggable) -> Self {
        self.drag = Some(drag);
        self
    }

    pub fn with_text(mut self, text: TextModel) -> Self {
        self.text = Some(text);
        self
    }

    pub fn on_update(mut self, f: impl FnMut(&mut Properties, f64) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn with_child(mut self, id: impl Into<String>, child: UiElement) -> Self {
        self.add_child(id, child);
        self
    }

    // ── accessors ──

    /// Identifier under which this element is stored in its owner, empty
    /// while detached and never inserted.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &ElementOwner {
        &self.owner
    }

    pub fn container(&self) -> Option<InterfaceId> {
        self.owner.container()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    pub fn hover(&self) -> Option<&Hoverable> {
        self.hover.as_ref()
    }

    pub fn click(&self) -> Option<&Clickable> {
        self.click.as_ref()
    }

    pub fn drag(&self) -> Option<&Draggable> {
        self.drag.as_ref()
    }

    pub fn text_model(&self) -> Option<&TextModel> {
        self.text.as_ref()
    }

    pub fn text_model_mut(&mut self) -> Option<&mut TextModel> {
        self.text.as_mut()
    }

    pub fn is_hovered(&self) -> bool {
        self.hover.as_ref().is_some_and(Hoverable::is_hovered)
    }

    pub fn is_clicked(&self) -> bool {
        self.click.as_ref().is_some_and(Clickable::is_clicked)
    }

    /// Whether the element reacts to the pointer at all.
    pub fn is_interactive(&self) -> bool {
        self.hover.is_some() || self.click.is_some()
    }

    // ── children ──

    pub fn children(&self) -> impl DoubleEndedIterator<Item = (&str, &UiElement)> {
        self.children.iter().map(|(id, el)| (id.as_str(), el))
    }

    pub fn child(&self, id: &str) -> Option<&UiElement> {
        self.children.get(id)
    }

    pub fn child_mut(&mut self, id: &str) -> Option<&mut UiElement> {
        self.children.get_mut(id)
    }

    /// Inserts `child` under `id`, returning the element it replaced.
    pub fn add_child(&mut self, id: impl Into<String>, mut child: UiElement) -> Option<UiElement> {
        let id = id.into();
        child.id = id.clone();
        child.owner = ElementOwner::Element { container: self.container(), parent: self.id.clone() };
        child.adopt_children();
        self.children.insert(id, child).map(UiElement::detached)
    }

    pub fn remove_child(&mut self, id: &str) -> Option<UiElement> {
        self.children.remove(id).map(UiElement::detached)
    }

    // ── tree bookkeeping ──

    pub(crate) fn attach(&mut self, id: &str, container: InterfaceId) {
        self.id = id.to_owned();
        self.owner = ElementOwner::Interface(container);
        self.adopt_children();
    }

    pub(crate) fn detached(mut self) -> Self {
        self.owner = ElementOwner::Detached;
        self.adopt_children();
        self
    }

    fn adopt_children(&mut self) {
        let container = self.container();
        for (id, child) in self.children.iter_mut() {
            child.id = id.clone();
            child.owner = ElementOwner::Element { container, parent: self.id.clone() };
            child.adopt_children();
        }
    }

    /// Lays out every text model in the subtree.
    pub(crate) fn precompute_text(&mut self, measure: &dyn GlyphMeasure) {
        if let Some(text) = self.text.as_mut() {
            text.precompute(measure, &self.properties);
        }
        for child in self.children.values_mut() {
            child.precompute_text(measure);
        }
    }

    /// Lays out only the text models edited, resized or refonted since their
    /// last layout.
    pub(crate) fn refresh_text(&mut self, measure: &dyn GlyphMeasure) {
        if let Some(text) = self.text.as_mut().filter(|t| t.needs_layout(&self.properties)) {
            text.precompute(measure, &self.properties);
        }
        for child in self.children.values_mut() {
            child.refresh_text(measure);
        }
    }

    // ── per tick ──

    /// Routes one pointer tick through this subtree.
    ///
    /// `origin` is the owner's absolute top-left and `container_size` the
    /// owner's size. Children are visited first, in descending identifier
    /// order, stopping at the first that consumes. This element's own
    /// routines always run; a consuming child only keeps it from starting a
    /// click. Returns whether the pointer was consumed.
    pub fn propagate_input(&mut self, input: &MouseInput, origin: Vec2, container_size: Vec2) -> bool {
        let bounds = self.properties.bounds().translated(origin);
        let inside = bounds.contains_inclusive(input.current_pos());

        let child_consumed = self
            .children
            .values_mut()
            .rev()
            .any(|child| child.propagate_input(input, bounds.origin, bounds.size));

        if let Some(hover) = self.hover.as_mut() {
            hover.routine(input, inside);
        }

        let click = self.click.as_mut().and_then(|c| c.routine(input, inside && !child_consumed));

        if click == Some(ClickEvent::Hold) {
            if let Some(drag) = self.drag {
                self.drag_by(input.displacement(), container_size, drag);
            }
        }

        child_consumed || self.is_clicked() || (inside && self.is_interactive())
    }

    /// Runs the exit side of hover on the subtree without touching clicks.
    pub fn pointer_left(&mut self, input: &MouseInput) {
        for child in self.children.values_mut() {
            child.pointer_left(input);
        }
        if let Some(hover) = self.hover.as_mut() {
            hover.routine(input, false);
        }
    }

    fn drag_by(&mut self, delta: Vec2, container_size: Vec2, drag: Draggable) {
        if delta == Vec2::zero() {
            return;
        }
        let mut pos = self.properties.position() + delta;
        if drag.clamp_to_container {
            pos = pos.clamp(Vec2::zero(), container_size - self.properties.size());
        }
        self.properties.set_position(pos.x, pos.y);
    }

    /// Runs children's hooks, then this element's.
    pub fn update_internal(&mut self, elapsed: f64) {
        for child in self.children.values_mut() {
            child.update_internal(elapsed);
        }
        if let Some(hook) = self.on_update.as_mut() {
            hook(&mut self.properties, elapsed);
        }
    }

    /// Records the subtree into `list`. `origin` is the owner's top-left in
    /// the coordinate space of the list.
    pub fn record(&self, list: &mut DrawList, origin: Vec2, z: ZIndex) {
        let props = &self.properties;
        let rect = props.bounds().translated(origin);

        let fill = props.background_color();
        let border_width = props.border_width();
        let border_color = props.border_color();
        if fill.is_visible() || (border_width > 0.0 && border_color.is_visible()) {
            list.push(
                z,
                DrawCmd::Panel(PanelCmd {
                    rect,
                    fill,
                    corner_radius: props.corner_radius(),
                    border_width,
                    border_color,
                }),
            );
        }

        if let Some(text) = self.text.as_ref().filter(|t| !t.layout().glyphs.is_empty()) {
            list.push(
                z.above(),
                DrawCmd::Glyphs(GlyphRunCmd {
                    origin: rect.origin,
                    glyphs: text.layout().glyphs.clone(),
                    family: props.font_family(),
                    size: props.font_size(),
                    color: props.font_color(),
                }),
            );
        }

        let child_z = z.above().above();
        for child in self.children.values() {
            child.record(list, rect.origin, child_z);
        }
    }

    /// Releases the subtree: children, callbacks and text layouts.
    pub fn clean_up(&mut self) {
        for child in self.children.values_mut() {
            child.clean_up();
        }
        self.children.clear();
        if let Some(hover) = self.hover.as_mut() {
            hover.clean_up();
        }
        if let Some(click) = self.click.as_mut() {
            click.clean_up();
        }
        if let Some(text) = self.text.as_mut() {
            text.clean_up();
        }
        self.on_update = None;
        self.properties.clear_listener();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glint_engine::coords::ColorRgba;
    use glint_engine::text::FixedMeasure;

    use super::*;

    fn at(x: f32, y: f32, w: f32, h: f32) -> impl FnOnce(&mut Properties) {
        move |p: &mut Properties| {
            p.set_position(x, y).set_size(w, h);
        }
    }

    fn pointer(input: &mut MouseInput, x: f32, y: f32, pressed: bool) {
        input.advance(Vec2::new(x, y), pressed);
    }

    const ORIGIN: Vec2 = Vec2::new(0.0, 0.0);
    const ROOM: Vec2 = Vec2::new(500.0, 500.0);

    // ── priority ──

    #[test]
    fn greatest_identifier_wins_overlapping_press() {
        let started = Rc::new(RefCell::new(Vec::new()));
        let mut root = UiElement::new().with_properties(at(0.0, 0.0, 500.0, 500.0));
        for id in ["a", "b", "c"] {
            let sink = started.clone();
            let click = Clickable::new().on_start(move |_| sink.borrow_mut().push(id));
            root.add_child(id, UiElement::new().with_properties(at(10.0, 10.0, 100.0, 100.0)).clickable(click));
        }

        let mut input = MouseInput::new();
        pointer(&mut input, 50.0, 50.0, true);
        assert!(root.propagate_input(&input, ORIGIN, ROOM));

        assert_eq!(*started.borrow(), ["c"]);
    }

    #[test]
    fn non_interactive_elements_do_not_consume() {
        let mut label = UiElement::new().with_properties(at(0.0, 0.0, 100.0, 100.0));
        let mut input = MouseInput::new();
        pointer(&mut input, 50.0, 50.0, true);
        assert!(!label.propagate_input(&input, ORIGIN, ROOM));
    }

    #[test]
    fn child_positions_are_relative_to_parent() {
        let mut root = UiElement::new()
            .with_properties(at(100.0, 100.0, 200.0, 200.0))
            .with_child("button", UiElement::new().with_properties(at(10.0, 10.0, 20.0, 20.0)).hoverable(Hoverable::new()));

        let mut input = MouseInput::new();
        pointer(&mut input, 15.0, 15.0, false);
        root.propagate_input(&input, ORIGIN, ROOM);
        assert!(!root.child("button").is_some_and(UiElement::is_hovered));

        pointer(&mut input, 115.0, 115.0, false);
        root.propagate_input(&input, ORIGIN, ROOM);
        assert!(root.child("button").is_some_and(UiElement::is_hovered));
    }

    #[test]
    fn consuming_child_blocks_parent_click_start_but_not_hover() {
        let mut root = UiElement::new()
            .with_properties(at(0.0, 0.0, 200.0, 200.0))
            .hoverable(Hoverable::new())
            .clickable(Clickable::new())
            .with_child("inner", UiElement::new().with_properties(at(0.0, 0.0, 50.0, 50.0)).clickable(Clickable::new()));

        let mut input = MouseInput::new();
        pointer(&mut input, 25.0, 25.0, true);
        assert!(root.propagate_input(&input, ORIGIN, ROOM));

        assert!(root.is_hovered());
        assert!(!root.is_clicked());
        assert!(root.child("inner").is_some_and(UiElement::is_clicked));
    }

    // ── drag ──

    #[test]
    fn drag_follows_pointer_and_clamps_to_container() {
        let mut handle = UiElement::new()
            .with_properties(at(295.0, 370.0, 50.0, 50.0))
            .clickable(Clickable::new())
            .draggable(Draggable::new());
        let container = Vec2::new(640.0, 480.0);
        let mut input = MouseInput::new();

        pointer(&mut input, 300.0, 380.0, false);
        handle.propagate_input(&input, ORIGIN, container);
        pointer(&mut input, 300.0, 380.0, true);
        handle.propagate_input(&input, ORIGIN, container);
        assert!(handle.is_clicked());

        pointer(&mut input, 280.0, 390.0, true);
        handle.propagate_input(&input, ORIGIN, container);
        assert_eq!(handle.properties().position(), Vec2::new(275.0, 380.0));

        // Far outside the panel: held click keeps dragging, clamped.
        pointer(&mut input, 2000.0, 2000.0, true);
        assert!(handle.propagate_input(&input, ORIGIN, container));
        assert_eq!(handle.properties().position(), Vec2::new(590.0, 430.0));

        pointer(&mut input, 2000.0, 2000.0, false);
        handle.propagate_input(&input, ORIGIN, container);
        assert!(!handle.is_clicked());
    }

    #[test]
    fn unclamped_drag_may_leave_container() {
        let mut handle = UiElement::new()
            .with_properties(at(0.0, 0.0, 10.0, 10.0))
            .clickable(Clickable::new())
            .draggable(Draggable::unclamped());
        let mut input = MouseInput::new();

        pointer(&mut input, 5.0, 5.0, true);
        handle.propagate_input(&input, ORIGIN, ROOM);
        pointer(&mut input, -20.0, 5.0, true);
        handle.propagate_input(&input, ORIGIN, ROOM);
        assert_eq!(handle.properties().position(), Vec2::new(-25.0, 0.0));
    }

    // ── tree ──

    #[test]
    fn owners_follow_attachment() {
        let mut root = UiElement::new().with_child("leaf", UiElement::new());
        assert_eq!(
            root.child("leaf").map(UiElement::owner),
            Some(&ElementOwner::Element { container: None, parent: String::new() })
        );

        let panel = InterfaceId::from_raw(7);
        root.attach("root", panel);
        let leaf = root.child("leaf").map(UiElement::owner).cloned();
        assert_eq!(leaf, Some(ElementOwner::Element { container: Some(panel), parent: "root".into() }));
        assert_eq!(root.owner(), &ElementOwner::Interface(panel));

        let leaf = root.remove_child("leaf").map(|el| el.owner().clone());
        assert_eq!(leaf, Some(ElementOwner::Detached));
    }

    #[test]
    fn duplicate_child_identifier_replaces() {
        let mut root = UiElement::new();
        root.add_child("x", UiElement::new().with_properties(at(1.0, 0.0, 0.0, 0.0)));
        let old = root.add_child("x", UiElement::new().with_properties(at(2.0, 0.0, 0.0, 0.0)));

        assert_eq!(old.map(|el| el.properties().position().x), Some(1.0));
        assert_eq!(root.children().count(), 1);
        assert_eq!(root.child("x").map(|el| el.properties().position().x), Some(2.0));
    }

    #[test]
    fn refresh_relays_out_text_after_a_resize() {
        let measure = FixedMeasure::default();
        let mut root = UiElement::new().with_child(
            "caption",
            UiElement::new().with_text(TextModel::new("hello world again")).with_properties(|p| {
                p.set_font_size(10.0).set_size(60.0, 40.0);
            }),
        );
        root.refresh_text(&measure);
        let lines = |root: &UiElement| {
            root.child("caption").and_then(UiElement::text_model).map(|t| t.layout().line_count)
        };
        assert_eq!(lines(&root), Some(2));

        if let Some(caption) = root.child_mut("caption") {
            caption.properties_mut().set_size(200.0, 40.0);
        }
        root.refresh_text(&measure);
        assert_eq!(lines(&root), Some(1));
    }

    #[test]
    fn update_runs_children_then_self() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (order.clone(), order.clone());
        let mut root = UiElement::new()
            .on_update(move |_, _| a.borrow_mut().push("root"))
            .with_child("kid", UiElement::new().on_update(move |p, dt| {
                b.borrow_mut().push("kid");
                p.set_position(dt as f32, 0.0);
            }));

        root.update_internal(0.5);

        assert_eq!(*order.borrow(), ["kid", "root"]);
        assert_eq!(root.child("kid").map(|k| k.properties().position().x), Some(0.5));
    }

    // ── record ──

    #[test]
    fn record_skips_invisible_backgrounds_and_offsets_children() {
        let mut root = UiElement::new()
            .with_properties(at(10.0, 20.0, 100.0, 100.0))
            .with_child(
                "swatch",
                UiElement::new().with_properties(|p| {
                    p.set_position(5.0, 5.0).set_size(10.0, 10.0).set_background_color(ColorRgba::white());
                }),
            )
            .with_child("caption", UiElement::new().with_text(TextModel::new("hi")));
        root.precompute_text(&FixedMeasure::default());

        let mut list = DrawList::new();
        root.record(&mut list, Vec2::new(50.0, 50.0), ZIndex::new(0));

        assert_eq!(list.len(), 2);
        let panel = list.items().iter().find_map(|item| match &item.cmd {
            DrawCmd::Panel(p) => Some(p.rect.origin),
            _ => None,
        });
        assert_eq!(panel, Some(Vec2::new(65.0, 75.0)));
    }

    #[test]
    fn clean_up_drops_children_and_state() {
        let mut root = UiElement::new()
            .clickable(Clickable::new())
            .with_child("kid", UiElement::new());
        let mut input = MouseInput::new();
        pointer(&mut input, 0.0, 0.0, true);
        root.propagate_input(&input, ORIGIN, ROOM);
        assert!(root.is_clicked());

        root.clean_up();
        assert!(!root.is_clicked());
        assert_eq!(root.children().count(), 0);
    }
}
