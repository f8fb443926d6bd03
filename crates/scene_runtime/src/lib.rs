//! # Scene Runtime
//!
//! A minimal runtime for composing behavior out of attachable components
//! owned by lightweight entities, grouped into scenes, coordinated by a
//! single active-scene manager.
//!
//! ## Features
//!
//! - **Typed component storage**: entities own heterogeneous components
//!   behind `dyn Component` and retrieve them by concrete type, first
//!   inserted match first
//! - **Shared lifecycle**: initialize once at registration, start once at
//!   activation, update every tick while the component's gate is open
//! - **Scene registry**: dense scene ids, exactly zero or one active
//!   scene, typed errors for unknown ids and missing activation
//! - **Declarative setup**: build a scene set from a TOML/RON config
//! - **Introspection**: textual scene-tree dump for debugging
//!
//! This is deliberately not a full ECS: there is no archetype storage and
//! no query language, just per-entity component bags with deterministic
//! dispatch order.
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_runtime::{Component, SceneError, SceneManager};
//!
//! struct Health {
//!     current: i32,
//! }
//!
//! impl Component for Health {
//!     fn update(&mut self, _delta_time: f32) {
//!         self.current -= 1;
//!     }
//! }
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut manager = SceneManager::new();
//!     let level = manager.add_scene("level1");
//!
//!     let scene = manager.scene_mut(level)?;
//!     let player = scene.create_entity_named("player");
//!     if let Some(entity) = scene.entity_mut(player) {
//!         entity.add_component(Health { current: 100 });
//!     }
//!
//!     manager.set_active_scene(level)?;
//!     manager.update(0.016)?;
//!
//!     let health = manager
//!         .scene(level)?
//!         .entity(player)
//!         .and_then(|entity| entity.get_component::<Health>());
//!     assert_eq!(health.map(|h| h.current), Some(99));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod config;
pub mod debug;
pub mod entity;
pub mod foundation;
pub mod manager;
pub mod scene;

pub use component::{AsAny, Component};
pub use config::{Config, ConfigError, SceneDecl, StageConfig};
pub use entity::{ComponentEntry, Entity, EntityKey};
pub use manager::{ManagerState, SceneError, SceneManager};
pub use scene::{Scene, SceneId};

/// Common imports for runtime users
pub mod prelude {
    pub use crate::{
        foundation::time::Timer, Component, Config, ConfigError, Entity, EntityKey, ManagerState,
        Scene, SceneDecl, SceneError, SceneId, SceneManager, StageConfig,
    };
}
