//! In-process host backed by reference-counted entities
//!
//! Useful wherever there is no real engine behind the pool: tests, benches,
//! and tools that just want pooled handles with observable lifecycle flags.

use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    rc::Rc,
};

use serde::{Deserialize, Serialize};

use super::traits::{Identifiable, ObjectHost};

/// Template for [`Entity`] instances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prototype {
    /// Name given to every entity built from this prototype
    pub name: String,
    /// Optional stable id overriding the name as pool key
    pub id: Option<String>,
}

impl Prototype {
    /// Create a prototype keyed by its name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    /// Set a stable id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Identifiable for Prototype {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn pool_id(&self) -> Option<Cow<'_, str>> {
        self.id.as_deref().map(Cow::Borrowed)
    }
}

#[derive(Debug)]
struct EntityState {
    serial: u64,
    name: String,
    id: Option<String>,
    active: Cell<bool>,
    parent: RefCell<Option<String>>,
    destroyed: Cell<bool>,
}

/// Handle to an object constructed by [`InMemoryHost`]
///
/// Clones share the same entity; equality is identity.
#[derive(Debug, Clone)]
pub struct Entity(Rc<EntityState>);

impl Entity {
    /// Construction order number, unique per host
    pub fn serial(&self) -> u64 {
        self.0.serial
    }

    /// Whether the host considers the entity live in its update cycle
    pub fn is_active(&self) -> bool {
        self.0.active.get()
    }

    /// Current parent, if attached
    pub fn parent(&self) -> Option<String> {
        self.0.parent.borrow().clone()
    }

    /// Attach the entity under a named parent
    pub fn set_parent(&self, parent: impl Into<String>) {
        *self.0.parent.borrow_mut() = Some(parent.into());
    }

    /// Whether the host has destroyed this entity
    pub fn is_destroyed(&self) -> bool {
        self.0.destroyed.get()
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Entity {}

impl Identifiable for Entity {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0.name)
    }

    fn pool_id(&self) -> Option<Cow<'_, str>> {
        self.0.id.as_deref().map(Cow::Borrowed)
    }
}

/// Host that builds [`Entity`] handles from [`Prototype`]s and counts
/// constructions and destructions
#[derive(Debug, Default)]
pub struct InMemoryHost {
    next_serial: Cell<u64>,
    constructed: Cell<usize>,
    destroyed: Cell<usize>,
}

impl InMemoryHost {
    /// Create a new host
    pub fn new() -> Self {
        Self::default()
    }

    /// Total entities constructed
    pub fn constructed(&self) -> usize {
        self.constructed.get()
    }

    /// Total entities destroyed
    pub fn destroyed(&self) -> usize {
        self.destroyed.get()
    }

    /// Entities constructed and not yet destroyed
    pub fn live(&self) -> usize {
        self.constructed().saturating_sub(self.destroyed())
    }
}

impl ObjectHost for InMemoryHost {
    type Template = Prototype;
    type Instance = Entity;

    fn construct(&self, template: &Prototype) -> Entity {
        let serial = self.next_serial.get() + 1;
        self.next_serial.set(serial);
        self.constructed.set(self.constructed.get() + 1);

        Entity(Rc::new(EntityState {
            serial,
            name: template.name.clone(),
            id: template.id.clone(),
            active: Cell::new(true),
            parent: RefCell::new(None),
            destroyed: Cell::new(false),
        }))
    }

    fn destroy(&self, instance: Entity) {
        if !instance.0.destroyed.replace(true) {
            instance.0.active.set(false);
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    fn activate(&self, instance: &Entity, active: bool) {
        instance.0.active.set(active);
    }

    fn detach_from_parent(&self, instance: &Entity) {
        instance.0.parent.borrow_mut().take();
    }
}
