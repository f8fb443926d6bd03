//! Entity implementation: heterogeneous component storage and typed lookup
//!
//! An entity owns an ordered sequence of type-erased components and drives
//! them through the shared lifecycle. Insertion order is invocation order.
//! Lookup is a linear scan with a runtime type check per element; the first
//! inserted component of the requested type wins.

use slotmap::new_key_type;

use crate::component::Component;

new_key_type! {
    /// Generational key identifying an entity within its scene.
    ///
    /// Keys are copyable handles: the scene retains lifecycle authority
    /// over the entity while callers keep keys for later access. A key
    /// held past the entity's removal stops resolving instead of dangling.
    pub struct EntityKey;
}

/// Per-component storage slot.
///
/// The activity gate lives here rather than in the component value, so
/// concrete components never carry bookkeeping state.
struct ComponentSlot {
    active: bool,
    component: Box<dyn Component>,
}

/// Read-only view of one stored component, for introspection.
pub struct ComponentEntry<'a> {
    active: bool,
    label: &'a str,
}

impl ComponentEntry<'_> {
    /// Whether the component's update gate is currently open.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The component's debug label (type name unless overridden).
    pub fn label(&self) -> &str {
        self.label
    }
}

/// An ordered owner of heterogeneous components.
///
/// Entities are created through [`Scene::create_entity`] and accessed via
/// their [`EntityKey`]; the scene keeps lifecycle authority.
///
/// [`Scene::create_entity`]: crate::scene::Scene::create_entity
pub struct Entity {
    id: EntityKey,
    name: String,
    components: Vec<ComponentSlot>,
}

impl Entity {
    pub(crate) fn new(id: EntityKey, name: String) -> Self {
        Self {
            id,
            name,
            components: Vec::new(),
        }
    }

    /// The key identifying this entity within its scene.
    pub fn id(&self) -> EntityKey {
        self.id
    }

    /// The entity's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the entity.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Attach a component, binding its owner to this entity.
    ///
    /// The component is appended to the entity's ordered sequence with its
    /// activity gate open, its [`Component::attached`] hook fires exactly
    /// once, and a mutable borrow is returned for immediate configuration.
    /// The entity retains sole ownership. Cannot fail.
    pub fn add_component<T: Component>(&mut self, component: T) -> &mut T {
        log::trace!(
            "attaching {} to entity {:?}",
            std::any::type_name::<T>(),
            self.id
        );
        let mut boxed = Box::new(component);
        boxed.attached(self.id);
        let index = self.components.len();
        self.components.push(ComponentSlot {
            active: true,
            component: boxed,
        });
        self.components[index]
            .component
            .downcast_mut::<T>()
            .expect("slot just inserted holds a component of type T")
    }

    /// Retrieve the first component of type `T`, in insertion order.
    ///
    /// This is a linear scan with a runtime type check per element;
    /// absence is a normal `None`, never an error. When several
    /// components share the type, the first inserted one wins.
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|slot| slot.component.downcast_ref::<T>())
    }

    /// Mutable variant of [`get_component`](Entity::get_component), with
    /// the same first-match contract.
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find_map(|slot| slot.component.downcast_mut::<T>())
    }

    /// Open or close the update gate of the first component of type `T`.
    ///
    /// Returns `false` if no component of that type is attached. Has no
    /// other side effects; `initialize` and `start` ignore the gate.
    pub fn set_component_active<T: Component>(&mut self, active: bool) -> bool {
        for slot in &mut self.components {
            if slot.component.is::<T>() {
                slot.active = active;
                return true;
            }
        }
        false
    }

    /// Read the update gate of the first component of type `T`.
    pub fn component_active<T: Component>(&self) -> Option<bool> {
        self.components
            .iter()
            .find(|slot| slot.component.is::<T>())
            .map(|slot| slot.active)
    }

    /// Number of attached components.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Read-only view of all components, in insertion order.
    pub fn components(&self) -> impl Iterator<Item = ComponentEntry<'_>> {
        self.components.iter().map(|slot| ComponentEntry {
            active: slot.active,
            label: slot.component.debug_label(),
        })
    }

    /// Run the `initialize` hook of every component, in insertion order,
    /// regardless of activity gates.
    pub fn initialize(&mut self) {
        for slot in &mut self.components {
            slot.component.initialize();
        }
    }

    /// Run the `start` hook of every component, in insertion order,
    /// regardless of activity gates.
    pub fn start(&mut self) {
        for slot in &mut self.components {
            slot.component.start();
        }
    }

    /// Run the `update` hook of every component whose gate is open, in
    /// insertion order.
    pub fn update(&mut self, delta_time: f32) {
        for slot in &mut self.components {
            if slot.active {
                slot.component.update(delta_time);
            }
        }
    }
}
