use std::collections::BTreeMap;
use std::fmt;

/// Stable name of an entity kind ("light", "sprite", ...).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TypeTag(pub &'static str);

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Per-frame behavior of a stored entity.
pub trait Entity {
    fn update(&mut self, elapsed: f64);

    /// Releases resources held by the entity. Called once, at teardown.
    fn clean_up(&mut self) {}
}

/// Tag-keyed buckets of entities.
///
/// Buckets are created on first insert and dropped when they become empty.
/// Tags iterate in sorted order, which keeps `update_all` deterministic.
#[derive(Debug)]
pub struct World<E> {
    buckets: BTreeMap<TypeTag, Vec<E>>,
    total: usize,
}

impl<E> Default for World<E> {
    fn default() -> Self {
        Self { buckets: BTreeMap::new(), total: 0 }
    }
}

impl<E: Entity> World<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: TypeTag, entity: E) {
        self.buckets.entry(tag).or_default().push(entity);
        self.total += 1;
        log::trace!("added an entity tagged [{tag}]");
    }

    /// Removes the first entity of `tag` equal to `entity`.
    pub fn remove(&mut self, tag: TypeTag, entity: &E) -> bool
    where
        E: PartialEq,
    {
        let Some(bucket) = self.buckets.get_mut(&tag) else {
            return false;
        };
        let Some(index) = bucket.iter().position(|e| e == entity) else {
            return false;
        };

        bucket.remove(index);
        self.total -= 1;
        if bucket.is_empty() {
            self.buckets.remove(&tag);
        }
        log::trace!("removed an entity tagged [{tag}]");
        true
    }

    pub fn objects(&self, tag: TypeTag) -> &[E] {
        self.buckets.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.buckets.keys().copied()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn update(&mut self, tag: TypeTag, elapsed: f64) {
        if let Some(bucket) = self.buckets.get_mut(&tag) {
            bucket.iter_mut().for_each(|e| e.update(elapsed));
        }
    }

    pub fn update_all(&mut self, elapsed: f64) {
        for bucket in self.buckets.values_mut() {
            bucket.iter_mut().for_each(|e| e.update(elapsed));
        }
    }

    /// Cleans up and drops every entity.
    pub fn clean_up(&mut self) {
        for bucket in self.buckets.values_mut() {
            bucket.iter_mut().for_each(Entity::clean_up);
        }
        self.buckets.clear();
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIGHT: TypeTag = TypeTag("light");
    const SPRITE: TypeTag = TypeTag("sprite");

    #[derive(Debug, PartialEq)]
    struct Probe {
        id: u32,
        age: f64,
    }

    impl Entity for Probe {
        fn update(&mut self, elapsed: f64) {
            self.age += elapsed;
        }
    }

    fn probe(id: u32) -> Probe {
        Probe { id, age: 0.0 }
    }

    #[test]
    fn buckets_are_homogeneous_per_tag() {
        let mut world = World::new();
        world.add(LIGHT, probe(1));
        world.add(SPRITE, probe(2));
        world.add(SPRITE, probe(3));
        assert_eq!(world.objects(SPRITE).len(), 2);
        assert_eq!(world.objects(LIGHT)[0].id, 1);
        assert_eq!(world.total(), 3);
    }

    #[test]
    fn removing_last_entity_drops_bucket() {
        let mut world = World::new();
        world.add(LIGHT, probe(1));
        assert!(world.remove(LIGHT, &probe(1)));
        assert!(!world.remove(LIGHT, &probe(1)));
        assert_eq!(world.tags().count(), 0);
        assert_eq!(world.total(), 0);
    }

    #[test]
    fn update_targets_only_one_tag() {
        let mut world = World::new();
        world.add(LIGHT, probe(1));
        world.add(SPRITE, probe(2));
        world.update(LIGHT, 0.5);
        assert_eq!(world.objects(LIGHT)[0].age, 0.5);
        assert_eq!(world.objects(SPRITE)[0].age, 0.0);
        world.update_all(0.25);
        assert_eq!(world.objects(SPRITE)[0].age, 0.25);
    }

    #[test]
    fn unknown_tag_is_empty() {
        let world: World<Probe> = World::new();
        assert!(world.objects(TypeTag("nope")).is_empty());
    }
}
