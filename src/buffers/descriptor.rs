//! Buffer slot holding at most one pooled instance

/// A single slot of a [`PoolBuffer`](super::PoolBuffer)
///
/// Plain storage: no validation, no lifecycle side effects. The buffer drives
/// construction, storage and destruction of whatever lives here.
#[derive(Debug, Clone)]
pub struct Descriptor<I> {
    instance: Option<I>,
}

impl<I> Descriptor<I> {
    /// Create an uninitialized slot
    pub fn empty() -> Self {
        Self { instance: None }
    }

    /// Create a slot already holding an instance
    pub fn with_instance(instance: I) -> Self {
        Self {
            instance: Some(instance),
        }
    }

    /// Borrow the held instance
    pub fn instance(&self) -> Option<&I> {
        self.instance.as_ref()
    }

    /// Store an instance, returning whatever was there before
    pub fn set(&mut self, instance: I) -> Option<I> {
        self.instance.replace(instance)
    }

    /// Move the instance out, leaving the slot empty
    pub fn take(&mut self) -> Option<I> {
        self.instance.take()
    }

    /// Whether the slot holds nothing
    pub fn is_empty(&self) -> bool {
        self.instance.is_none()
    }
}

impl<I> Default for Descriptor<I> {
    fn default() -> Self {
        Self::empty()
    }
}
