use glint_engine::coords::Vec2;
use glint_engine::world::{Entity, TypeTag, World};

pub const MARKER: TypeTag = TypeTag("marker");
pub const LIGHT: TypeTag = TypeTag("light");

/// Something living in world space behind the panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub name: &'static str,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Entity for Prop {
    fn update(&mut self, elapsed: f64) {
        self.position += self.velocity * elapsed as f32;
    }

    fn clean_up(&mut self) {
        log::trace!("prop `{}` released", self.name);
    }
}

/// World layer of the studio: a panning camera over a few props.
///
/// The camera only follows drags the UI did not capture.
#[derive(Debug, Default)]
pub struct Stage {
    pub camera: Vec2,
    pub props: World<Prop>,
}

impl Stage {
    pub fn populated() -> Self {
        let mut props = World::new();
        props.add(MARKER, Prop { name: "origin", position: Vec2::zero(), velocity: Vec2::zero() });
        props.add(MARKER, Prop { name: "drifter", position: Vec2::new(100.0, 0.0), velocity: Vec2::new(10.0, 0.0) });
        props.add(LIGHT, Prop { name: "sun", position: Vec2::new(0.0, -500.0), velocity: Vec2::zero() });
        Self { camera: Vec2::zero(), props }
    }

    /// Pans by the pointer delta of a drag over empty space.
    pub fn pan(&mut self, delta: Vec2) {
        self.camera -= delta;
    }

    pub fn update(&mut self, elapsed: f64) {
        self.props.update_all(elapsed);
    }

    pub fn clean_up(&mut self) {
        self.props.clean_up();
    }
}
