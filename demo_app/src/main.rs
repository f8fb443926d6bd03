//! Stage demo application
//!
//! Builds a two-scene stage from a declarative config, populates the
//! mission scene with a few component-bearing entities, activates it, and
//! ticks the manager for a fixed number of frames.

mod components;

use components::{Health, Spinner};
use scene_runtime::foundation::logging;
use scene_runtime::debug;
use scene_runtime::prelude::*;

const FRAMES: u32 = 120;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = StageConfig {
        scenes: vec![
            SceneDecl {
                name: "hangar".to_string(),
                active: false,
            },
            SceneDecl {
                name: "mission".to_string(),
                active: false,
            },
        ],
    };
    let mut manager = SceneManager::from_config(&config)?;

    let mission = manager
        .scenes()
        .find(|scene| scene.name() == "mission")
        .map(Scene::id)
        .ok_or("mission scene missing from config")?;

    populate_mission(manager.scene_mut(mission)?);

    // Activation runs the start phase on everything populated above.
    manager.set_active_scene(mission)?;

    let mut timer = Timer::new();
    for _ in 0..FRAMES {
        timer.update();
        manager.update(timer.delta_time())?;
    }
    log::info!(
        "ran {} frames in {:.3}s ({:.1} fps average)",
        timer.frame_count(),
        timer.total_time(),
        timer.average_fps()
    );

    report(&manager, mission)?;
    print!("{}", debug::scene_tree(&manager));
    Ok(())
}

fn populate_mission(scene: &mut Scene) {
    let station = scene.create_entity_named("station");
    if let Some(entity) = scene.entity_mut(station) {
        entity.add_component(Spinner {
            angle: 0.0,
            rate: 0.5,
        });
    }

    let ship = scene.create_entity_named("ship");
    if let Some(entity) = scene.entity_mut(ship) {
        let health = entity.add_component(Health::full(100.0, 2.5));
        health.current = 40.0;
        entity.add_component(Spinner {
            angle: 0.0,
            rate: 3.0,
        });
        // The ship tumbles only after launch.
        entity.set_component_active::<Spinner>(false);
    }
}

fn report(manager: &SceneManager, mission: SceneId) -> Result<(), SceneError> {
    let scene = manager.scene(mission)?;
    for entity in scene.entities() {
        if let Some(health) = entity.get_component::<Health>() {
            log::info!(
                "{}: {:.1}/{:.1} hp (owner bound: {})",
                entity.name(),
                health.current,
                health.max,
                health.owner == Some(entity.id())
            );
        }
        if let Some(spinner) = entity.get_component::<Spinner>() {
            log::info!("{}: spun {:.2} rad", entity.name(), spinner.angle);
        }
    }
    Ok(())
}
