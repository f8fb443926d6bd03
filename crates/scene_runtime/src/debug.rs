//! Debug module for scene-tree introspection
//!
//! Produces a read-only textual view of a manager's registry: scenes,
//! their entities, and each entity's components with their activity
//! gates. The host decides where the output goes (log, stdout, a debug
//! overlay); nothing here mutates core state.

use std::fmt::Write;

use crate::manager::SceneManager;
use crate::scene::Scene;

/// Render the full scene tree of a manager as indented text.
///
/// The active scene is marked; each component line shows its gate state
/// and debug label.
pub fn scene_tree(manager: &SceneManager) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "SceneManager: {} scene(s), state {:?}",
        manager.scene_count(),
        manager.state()
    );
    for scene in manager.scenes() {
        let active = manager.active_scene_id() == Some(scene.id());
        write_scene(&mut out, scene, active);
    }
    out
}

fn write_scene(out: &mut String, scene: &Scene, active: bool) {
    let marker = if active { " [active]" } else { "" };
    let _ = writeln!(
        out,
        "  scene {} \"{}\"{}: {} entity(ies)",
        scene.id(),
        scene.name(),
        marker,
        scene.entity_count()
    );
    for entity in scene.entities() {
        let _ = writeln!(
            out,
            "    entity \"{}\": {} component(s)",
            entity.name(),
            entity.component_count()
        );
        for entry in entity.components() {
            let gate = if entry.is_active() { "on" } else { "off" };
            let _ = writeln!(out, "      [{}] {}", gate, entry.label());
        }
    }
}
