//! Component trait and downcast support
//!
//! A component is a unit of behavior attached to exactly one entity. The
//! entity drives every attached component through a shared lifecycle:
//! `initialize` once, `start` once, then `update` every tick while the
//! component's activity gate is open.
//!
//! Components are stored type-erased (`Box<dyn Component>`); the [`AsAny`]
//! supertrait gives every component a downcast surface so entities can
//! retrieve them by concrete type again without knowing the type up front.

use std::any::Any;

use crate::entity::EntityKey;

/// Downcast surface shared by all components.
///
/// A blanket implementation covers every `'static` type, so component
/// authors never implement this by hand.
pub trait AsAny: Any {
    /// Borrow the value as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow the value as [`Any`] for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A unit of behavior owned by an entity.
///
/// All hooks default to no-ops; concrete components override what they
/// need. Hooks are invoked in component insertion order:
///
/// 1. [`attached`](Component::attached) exactly once when the component is
///    added to an entity, carrying the owning entity's key.
/// 2. [`initialize`](Component::initialize) exactly once, during the
///    owning scene's registration phase.
/// 3. [`start`](Component::start) exactly once, when the owning scene
///    becomes the active scene.
/// 4. [`update`](Component::update) every tick, skipped while the
///    component's activity gate is closed (see
///    [`Entity::set_component_active`](crate::entity::Entity::set_component_active)).
///
/// None of the hooks can fail; side effects stay confined to the concrete
/// component's own state.
pub trait Component: AsAny {
    /// Called exactly once when the component is attached to an entity.
    ///
    /// `owner` is the generational key of the owning entity, valid for the
    /// component's entire observable lifetime. A component that needs a
    /// back-reference stores this key; a stale key fails lookup instead of
    /// dangling.
    fn attached(&mut self, _owner: EntityKey) {}

    /// Called once, before any `start`, during scene registration.
    fn initialize(&mut self) {}

    /// Called once when the owning scene is activated, after every entity
    /// in the scene has been initialized.
    fn start(&mut self) {}

    /// Called every tick while the component's activity gate is open.
    ///
    /// `_delta_time` is the caller-supplied elapsed time in seconds. No
    /// validation of sign or magnitude is performed; the value propagates
    /// unchanged from the manager's tick.
    fn update(&mut self, _delta_time: f32) {}

    /// Human-readable label used by the debug tree.
    ///
    /// Defaults to the component's type name.
    fn debug_label(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl dyn Component {
    /// Whether the concrete type of this component is `T`.
    pub fn is<T: Component>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    /// Downcast to the concrete component type `T`.
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref()
    }

    /// Mutable downcast to the concrete component type `T`.
    pub fn downcast_mut<T: Component>(&mut self) -> Option<&mut T> {
        AsAny::as_any_mut(self).downcast_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl Component for Plain {}

    struct Labeled;

    impl Component for Labeled {
        fn debug_label(&self) -> &str {
            "labeled"
        }
    }

    #[test]
    fn test_default_hooks_are_noops() {
        let mut plain = Plain;
        plain.attached(EntityKey::default());
        plain.initialize();
        plain.start();
        plain.update(0.016);
    }

    #[test]
    fn test_default_debug_label_is_type_name() {
        let plain = Plain;
        assert!(plain.debug_label().ends_with("Plain"));
    }

    #[test]
    fn test_debug_label_override() {
        let labeled = Labeled;
        assert_eq!(labeled.debug_label(), "labeled");
    }

    #[test]
    fn test_downcast_through_trait_object() {
        let boxed: Box<dyn Component> = Box::new(Labeled);
        assert!(boxed.is::<Labeled>());
        assert!(boxed.downcast_ref::<Labeled>().is_some());
        assert!(boxed.downcast_ref::<Plain>().is_none());
    }
}
