//! Scene implementation: ordered entity ownership and lifecycle forwarding
//!
//! A scene owns its entities in an arena keyed by generational
//! [`EntityKey`]s, with a separate list preserving insertion order for
//! lifecycle dispatch. Callers hold copyable keys instead of shared
//! pointers; a key kept past removal simply stops resolving.

use slotmap::SlotMap;

use crate::entity::{Entity, EntityKey};

/// Identifier assigned to a scene by its manager at registration time.
///
/// Assigned once and never changed.
pub type SceneId = u32;

/// An ordered owner of entities, identified by a manager-assigned id and
/// a name.
///
/// Scenes are created through
/// [`SceneManager::add_scene`](crate::manager::SceneManager::add_scene);
/// the manager keeps lifecycle authority.
pub struct Scene {
    id: SceneId,
    name: String,
    entities: SlotMap<EntityKey, Entity>,
    order: Vec<EntityKey>,
}

impl Scene {
    pub(crate) fn new(id: SceneId, name: String) -> Self {
        Self {
            id,
            name,
            entities: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// The manager-assigned scene identifier.
    pub fn id(&self) -> SceneId {
        self.id
    }

    /// The scene's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create a new entity with a generated name and append it to the
    /// scene's ordered sequence.
    pub fn create_entity(&mut self) -> EntityKey {
        let name = format!("entity-{}", self.order.len());
        self.create_entity_named(name)
    }

    /// Create a new named entity and append it to the scene's ordered
    /// sequence.
    ///
    /// The returned key is the caller's handle for later configuration via
    /// [`entity_mut`](Scene::entity_mut); the scene co-owns the entity and
    /// drives its lifecycle.
    pub fn create_entity_named(&mut self, name: impl Into<String>) -> EntityKey {
        let name = name.into();
        log::debug!("scene {} ({}): creating entity {:?}", self.id, self.name, name);
        let key = self.entities.insert_with_key(|key| Entity::new(key, name));
        self.order.push(key);
        key
    }

    /// Borrow an entity by key. Returns `None` for stale or foreign keys.
    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Mutably borrow an entity by key. Returns `None` for stale or
    /// foreign keys.
    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Remove an entity from the scene, destroying it and its components.
    ///
    /// Removes at most one occurrence; a key that no longer resolves is a
    /// silent no-op, making repeated removal idempotent. Returns whether
    /// an entity was removed.
    pub fn remove_entity(&mut self, key: EntityKey) -> bool {
        match self.entities.remove(key) {
            Some(entity) => {
                log::debug!(
                    "scene {} ({}): removing entity {:?}",
                    self.id,
                    self.name,
                    entity.name()
                );
                self.order.retain(|k| *k != key);
                true
            }
            None => false,
        }
    }

    /// Read-only view of the scene's entities, in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|key| self.entities.get(*key))
    }

    /// Number of entities currently in the scene.
    pub fn entity_count(&self) -> usize {
        self.order.len()
    }

    /// Run the `initialize` phase on every entity, in insertion order.
    pub fn initialize(&mut self) {
        for key in &self.order {
            if let Some(entity) = self.entities.get_mut(*key) {
                entity.initialize();
            }
        }
    }

    /// Run the `start` phase on every entity, in insertion order.
    pub fn start(&mut self) {
        for key in &self.order {
            if let Some(entity) = self.entities.get_mut(*key) {
                entity.start();
            }
        }
    }

    /// Tick every entity, in insertion order.
    ///
    /// Entities have no activity gate of their own; only components gate
    /// on activity.
    pub fn update(&mut self, delta_time: f32) {
        for key in &self.order {
            if let Some(entity) = self.entities.get_mut(*key) {
                entity.update(delta_time);
            }
        }
    }
}
