//! Scene manager: registry, active-scene tracking, and tick dispatch
//!
//! The manager owns every registered scene, assigns their identifiers,
//! tracks the single active scene, and forwards the per-tick update to it.
//! It is an explicitly constructed value owned by the host application's
//! composition root; there is no global instance.

use std::collections::HashMap;

use crate::config::{ConfigError, StageConfig};
use crate::scene::{Scene, SceneId};

/// Errors raised by [`SceneManager`] operations.
///
/// Raised at the point of the failing call and never caught internally;
/// the host decides whether to recover or terminate.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// The requested scene identifier is not in the registry.
    #[error("no scene with id {0} is registered")]
    UnknownSceneId(SceneId),

    /// No scene has been activated yet.
    #[error("no active scene is set")]
    NoActiveScene,
}

/// Coarse registry state, for host-side assertions and diagnostics.
///
/// There are no transitions back: scenes are never removed and the active
/// scene is never cleared, only re-targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    /// No scenes registered.
    Empty,
    /// At least one scene registered, none active.
    Populated,
    /// Exactly one scene active.
    Active,
}

/// Registry of scenes and the single active scene.
///
/// Scene identifiers come from a monotonic counter, so every registered
/// scene gets a fresh id; with no removal API the sequence stays dense
/// (0, 1, 2, ...).
pub struct SceneManager {
    scenes: HashMap<SceneId, Scene>,
    order: Vec<SceneId>,
    next_id: SceneId,
    active: Option<SceneId>,
}

impl SceneManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
            active: None,
        }
    }

    /// Build a manager from a declarative scene set.
    ///
    /// Scenes are registered in declaration order; the declaration flagged
    /// active (at most one, validated) is activated last.
    pub fn from_config(config: &StageConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut manager = Self::new();
        let mut activate = None;
        for decl in &config.scenes {
            let id = manager.add_scene(&decl.name);
            if decl.active {
                activate = Some(id);
            }
        }
        if let Some(id) = activate {
            manager
                .set_active_scene(id)
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(manager)
    }

    /// Register a new scene and immediately run its `initialize` phase.
    ///
    /// The scene is constructed with the next identifier and the given
    /// name. Registration does not activate the scene. Returns the
    /// assigned identifier.
    pub fn add_scene(&mut self, name: impl Into<String>) -> SceneId {
        let id = self.next_id;
        self.next_id += 1;

        let mut scene = Scene::new(id, name.into());
        log::info!("registered scene {} ({})", id, scene.name());
        scene.initialize();

        self.scenes.insert(id, scene);
        self.order.push(id);
        id
    }

    /// Make the scene with the given id the active scene and immediately
    /// run its `start` phase.
    ///
    /// Re-targeting from another active scene runs no teardown hook on the
    /// previous scene; the switch is a plain re-target. Fails with
    /// [`SceneError::UnknownSceneId`] if the id is not registered.
    pub fn set_active_scene(&mut self, id: SceneId) -> Result<(), SceneError> {
        let scene = self
            .scenes
            .get_mut(&id)
            .ok_or(SceneError::UnknownSceneId(id))?;
        log::info!("scene {} ({}) is now active", id, scene.name());

        self.active = Some(id);
        scene.start();
        Ok(())
    }

    /// Borrow the active scene.
    ///
    /// Fails with [`SceneError::NoActiveScene`] before any activation.
    pub fn active_scene(&self) -> Result<&Scene, SceneError> {
        let id = self.active.ok_or(SceneError::NoActiveScene)?;
        self.scenes.get(&id).ok_or(SceneError::UnknownSceneId(id))
    }

    /// Mutably borrow the active scene.
    pub fn active_scene_mut(&mut self) -> Result<&mut Scene, SceneError> {
        let id = self.active.ok_or(SceneError::NoActiveScene)?;
        self.scenes
            .get_mut(&id)
            .ok_or(SceneError::UnknownSceneId(id))
    }

    /// Identifier of the active scene, if any.
    pub fn active_scene_id(&self) -> Option<SceneId> {
        self.active
    }

    /// Borrow a scene by id.
    ///
    /// Fails with [`SceneError::UnknownSceneId`] if the id is not
    /// registered.
    pub fn scene(&self, id: SceneId) -> Result<&Scene, SceneError> {
        self.scenes.get(&id).ok_or(SceneError::UnknownSceneId(id))
    }

    /// Mutably borrow a scene by id.
    pub fn scene_mut(&mut self, id: SceneId) -> Result<&mut Scene, SceneError> {
        self.scenes
            .get_mut(&id)
            .ok_or(SceneError::UnknownSceneId(id))
    }

    /// Tick the active scene.
    ///
    /// `delta_time` is the caller-supplied elapsed time in seconds and
    /// propagates unvalidated to every active component. Fails with
    /// [`SceneError::NoActiveScene`] if nothing has been activated.
    pub fn update(&mut self, delta_time: f32) -> Result<(), SceneError> {
        let id = self.active.ok_or(SceneError::NoActiveScene)?;
        let scene = self
            .scenes
            .get_mut(&id)
            .ok_or(SceneError::UnknownSceneId(id))?;
        scene.update(delta_time);
        Ok(())
    }

    /// Current registry state.
    pub fn state(&self) -> ManagerState {
        if self.active.is_some() {
            ManagerState::Active
        } else if self.scenes.is_empty() {
            ManagerState::Empty
        } else {
            ManagerState::Populated
        }
    }

    /// Number of registered scenes.
    pub fn scene_count(&self) -> usize {
        self.order.len()
    }

    /// Read-only view of all scenes, in registration order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.order.iter().filter_map(|id| self.scenes.get(id))
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::config::SceneDecl;
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    struct Probe {
        tag: &'static str,
        log: EventLog,
    }

    impl Probe {
        fn new(tag: &'static str, log: &EventLog) -> Self {
            Self {
                tag,
                log: Rc::clone(log),
            }
        }
    }

    impl Component for Probe {
        fn start(&mut self) {
            self.log.borrow_mut().push(format!("{}.start", self.tag));
        }

        fn update(&mut self, delta_time: f32) {
            self.log
                .borrow_mut()
                .push(format!("{}.update({delta_time})", self.tag));
        }
    }

    struct Health {
        current: i32,
        ticks: u32,
    }

    impl Component for Health {
        fn update(&mut self, _delta_time: f32) {
            self.ticks += 1;
        }
    }

    #[test]
    fn test_scene_ids_are_assigned_densely() {
        let mut manager = SceneManager::new();
        assert_eq!(manager.state(), ManagerState::Empty);

        let a = manager.add_scene("a");
        assert_eq!(manager.state(), ManagerState::Populated);
        let b = manager.add_scene("b");
        let c = manager.add_scene("c");

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(manager.scene_count(), 3);
    }

    #[test]
    fn test_scenes_iterate_in_registration_order() {
        let mut manager = SceneManager::new();
        manager.add_scene("a");
        manager.add_scene("b");

        let names: Vec<_> = manager.scenes().map(Scene::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_active_scene_errors_on_fresh_manager() {
        let manager = SceneManager::new();
        assert_eq!(manager.active_scene().err(), Some(SceneError::NoActiveScene));
        assert_eq!(manager.active_scene_id(), None);
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut manager = SceneManager::new();
        manager.add_scene("a");
        manager.add_scene("b");
        manager.add_scene("c");

        assert_eq!(
            manager.set_active_scene(99).err(),
            Some(SceneError::UnknownSceneId(99))
        );
        assert_eq!(manager.scene(99).err(), Some(SceneError::UnknownSceneId(99)));
        assert_eq!(manager.state(), ManagerState::Populated);
    }

    #[test]
    fn test_update_without_active_scene_fails() {
        let mut manager = SceneManager::new();
        manager.add_scene("a");

        assert_eq!(manager.update(0.016).err(), Some(SceneError::NoActiveScene));
    }

    #[test]
    fn test_activation_runs_start_phase_once() {
        let log: EventLog = Rc::default();
        let mut manager = SceneManager::new();
        let id = manager.add_scene("level");

        let scene = manager.scene_mut(id).expect("scene exists");
        let key = scene.create_entity();
        if let Some(entity) = scene.entity_mut(key) {
            entity.add_component(Probe::new("p", &log));
        }

        manager.set_active_scene(id).expect("valid id");
        assert_eq!(manager.state(), ManagerState::Active);
        assert_eq!(*log.borrow(), vec!["p.start"]);
    }

    #[test]
    fn test_retarget_runs_no_teardown_on_previous_scene() {
        let log: EventLog = Rc::default();
        let mut manager = SceneManager::new();
        let first = manager.add_scene("first");
        let second = manager.add_scene("second");

        for (id, tag) in [(first, "first"), (second, "second")] {
            let scene = manager.scene_mut(id).expect("scene exists");
            let key = scene.create_entity();
            if let Some(entity) = scene.entity_mut(key) {
                entity.add_component(Probe::new(tag, &log));
            }
        }

        manager.set_active_scene(first).expect("valid id");
        manager.set_active_scene(second).expect("valid id");

        // Switching starts the new scene; the old one sees nothing.
        assert_eq!(*log.borrow(), vec!["first.start", "second.start"]);
        assert_eq!(manager.active_scene_id(), Some(second));
    }

    #[test]
    fn test_update_reaches_only_the_active_scene() {
        let log: EventLog = Rc::default();
        let mut manager = SceneManager::new();
        let first = manager.add_scene("first");
        let second = manager.add_scene("second");

        for (id, tag) in [(first, "first"), (second, "second")] {
            let scene = manager.scene_mut(id).expect("scene exists");
            let key = scene.create_entity();
            if let Some(entity) = scene.entity_mut(key) {
                entity.add_component(Probe::new(tag, &log));
            }
        }

        manager.set_active_scene(first).expect("valid id");
        log.borrow_mut().clear();
        manager.update(0.5).expect("active scene set");

        assert_eq!(*log.borrow(), vec!["first.update(0.5)"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut manager = SceneManager::new();
        let level1 = manager.add_scene("level1");
        let level2 = manager.add_scene("level2");
        assert_eq!((level1, level2), (0, 1));

        manager.set_active_scene(level1).expect("valid id");

        let scene = manager.active_scene_mut().expect("active scene set");
        let key = scene.create_entity_named("player");
        if let Some(entity) = scene.entity_mut(key) {
            let health = entity.add_component(Health {
                current: 0,
                ticks: 0,
            });
            // Configure through the returned handle.
            health.current = 100;
        }

        manager.update(0.016).expect("active scene set");

        let scene = manager.scene(level1).expect("registered");
        let health = scene
            .entity(key)
            .and_then(|entity| entity.get_component::<Health>())
            .expect("component attached");
        assert_eq!(health.ticks, 1);
        assert_eq!(health.current, 100);

        // The inactive scene is untouched by the tick.
        let other = manager.scene(level2).expect("registered");
        assert_eq!(other.entity_count(), 0);
        assert_eq!(other.name(), "level2");
    }

    #[test]
    fn test_from_config_registers_and_activates() {
        let config = StageConfig {
            scenes: vec![
                SceneDecl {
                    name: "hangar".to_string(),
                    active: false,
                },
                SceneDecl {
                    name: "mission".to_string(),
                    active: true,
                },
            ],
        };

        let manager = SceneManager::from_config(&config).expect("valid config");
        assert_eq!(manager.scene_count(), 2);
        assert_eq!(manager.active_scene_id(), Some(1));
        assert_eq!(
            manager.active_scene().map(Scene::name).ok(),
            Some("mission")
        );
    }

    #[test]
    fn test_from_config_rejects_two_active_scenes() {
        let config = StageConfig {
            scenes: vec![
                SceneDecl {
                    name: "a".to_string(),
                    active: true,
                },
                SceneDecl {
                    name: "b".to_string(),
                    active: true,
                },
            ],
        };

        assert!(matches!(
            SceneManager::from_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }
}
