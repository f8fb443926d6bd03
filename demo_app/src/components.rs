//! Demo-specific components

use scene_runtime::{Component, EntityKey};

/// Rotates at a fixed rate, accumulating angle over ticks.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Accumulated rotation in radians.
    pub angle: f32,

    /// Rotation rate in radians per second.
    pub rate: f32,
}

impl Component for Spinner {
    fn start(&mut self) {
        log::info!("spinner starting at {:.2} rad/s", self.rate);
    }

    fn update(&mut self, delta_time: f32) {
        self.angle += self.rate * delta_time;
    }

    fn debug_label(&self) -> &str {
        "Spinner"
    }
}

/// Simple hit-point pool with per-second regeneration.
#[derive(Debug, Clone)]
pub struct Health {
    /// Current hit points.
    pub current: f32,

    /// Upper bound for regeneration.
    pub max: f32,

    /// Hit points regained per second.
    pub regen_per_second: f32,

    /// Key of the owning entity, bound at attach time.
    pub owner: Option<EntityKey>,
}

impl Health {
    /// Full pool with the given capacity and regeneration rate.
    pub fn full(max: f32, regen_per_second: f32) -> Self {
        Self {
            current: max,
            max,
            regen_per_second,
            owner: None,
        }
    }
}

impl Component for Health {
    fn attached(&mut self, owner: EntityKey) {
        self.owner = Some(owner);
    }

    fn initialize(&mut self) {
        self.current = self.current.min(self.max);
    }

    fn update(&mut self, delta_time: f32) {
        self.current = (self.current + self.regen_per_second * delta_time).min(self.max);
    }

    fn debug_label(&self) -> &str {
        "Health"
    }
}
