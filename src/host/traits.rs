//! Host capability traits
//!
//! The pooling core never creates or tears down objects itself. Everything
//! environment specific goes through [`ObjectHost`], and registry keys come
//! from [`Identifiable`].

use std::{borrow::Cow, fmt};

/// Capability for objects that can be routed to a keyed pool
pub trait Identifiable {
    /// Host-assigned name, used as the key when no id is supplied
    fn name(&self) -> Cow<'_, str>;

    /// Stable id that overrides the name as registry key
    fn pool_id(&self) -> Option<Cow<'_, str>> {
        None
    }
}

/// Derive the registry key for an object: its id if it has one, otherwise
/// its name
pub fn pool_key<T: Identifiable + ?Sized>(object: &T) -> String {
    match object.pool_id() {
        Some(id) => id.into_owned(),
        None => object.name().into_owned(),
    }
}

/// Factory and destroyer for pooled instances
///
/// Instances are handles: cloning one must yield another reference to the
/// same object and `PartialEq` must compare identity. Methods take `&self`;
/// hosts that keep bookkeeping use interior mutability.
pub trait ObjectHost: fmt::Debug {
    /// Resource an instance is constructed from
    type Template: Identifiable + Clone + fmt::Debug;

    /// Handle to a constructed object
    type Instance: Identifiable + Clone + PartialEq + fmt::Debug;

    /// Construct a new instance from a template
    fn construct(&self, template: &Self::Template) -> Self::Instance;

    /// Destroy an instance for good
    fn destroy(&self, instance: Self::Instance);

    /// Toggle whether the instance takes part in the host's update cycle
    fn activate(&self, instance: &Self::Instance, active: bool);

    /// Detach the instance from whatever parent it was attached to
    fn detach_from_parent(&self, instance: &Self::Instance);

    /// Put an instance to sleep before it goes back on the free list
    fn prepare_for_storage(&self, instance: &Self::Instance) {
        self.activate(instance, false);
        self.detach_from_parent(instance);
    }

    /// Wake an instance that is being handed out
    fn prepare_for_use(&self, instance: &Self::Instance) {
        self.activate(instance, true);
    }
}
