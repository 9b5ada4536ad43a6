use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Ordered entity storage using a flat Vec.
/// Insertion order is iteration order, which is also draw order and
/// collision order, so removal never reorders the remaining entities.
#[derive(Debug, Clone)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
        }
    }

    /// Add an entity to the end of the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove an entity by ID, preserving the order of the rest.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drop every entity.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rect::Rect;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_dst(Rect::new(10.0, 20.0, 32.0, 32.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.dst.x, 10.0);
        assert_eq!(e.dst.y, 20.0);
    }

    #[test]
    fn despawn_preserves_order() {
        let mut scene = Scene::new();
        for i in 1..=4 {
            scene.spawn(Entity::new(EntityId(i)));
        }
        assert!(scene.despawn(EntityId(2)).is_some());
        let ids: Vec<u32> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(scene.despawn(EntityId(9)).is_none());
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("play"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("quit"));
        assert_eq!(scene.find_by_tag("quit").unwrap().id, EntityId(2));
        assert!(scene.find_by_tag("options").is_none());
    }

    #[test]
    fn clear_empties_scene() {
        let mut scene = Scene::with_capacity(8);
        scene.spawn(Entity::new(EntityId(1)));
        scene.clear();
        assert!(scene.is_empty());
    }
}
