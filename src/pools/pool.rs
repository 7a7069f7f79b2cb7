//! Pool of instances for one template

use std::rc::Rc;

use log::debug;

use crate::{
    buffers::PoolBuffer,
    error::{FreeError, FreeResult, PoolError, Result},
    host::ObjectHost,
};

use super::{config::PoolConfig, stats::PoolStats};

/// Pool wrapping one [`PoolBuffer`] and, optionally, the set of instances
/// currently checked out of it
///
/// With tracking on, freeing an instance the pool does not consider active is
/// rejected with [`PoolError::InstanceNotActive`]: the buffer is left
/// untouched and the instance comes back to the caller inside the
/// [`FreeError`]. With tracking off the pool has no record of what is out, so any
/// instance is accepted and [`free_all`](Self::free_all) does nothing.
#[derive(Debug)]
pub struct Pool<H: ObjectHost> {
    /// Registry key
    key: String,
    /// Exclusively owned buffer
    buffer: PoolBuffer<H>,
    /// Checked-out instances in acquisition order
    active: Vec<H::Instance>,
    /// Whether `active` is maintained
    track_active: bool,
    /// Highest `active.len()` seen
    peak_active: usize,
    /// Checked-out instances destroyed by `destroy_active`
    destroyed_active: usize,
}

impl<H: ObjectHost> Pool<H> {
    /// Create a new pool pre-warmed with `initial_count` instances
    pub fn new(
        key: impl Into<String>,
        host: Rc<H>,
        template: H::Template,
        initial_count: usize,
        track_active: bool,
    ) -> Self {
        let key = key.into();
        let buffer = PoolBuffer::new(key.clone(), host, template, initial_count);

        Self {
            key,
            buffer,
            active: Vec::new(),
            track_active,
            peak_active: 0,
            destroyed_active: 0,
        }
    }

    /// Create a pool from a validated configuration
    pub fn from_config(config: &PoolConfig, host: Rc<H>, template: H::Template) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            config.key.clone(),
            host,
            template,
            config.effective_initial_count(),
            config.track_active,
        ))
    }

    /// Hand out an instance, growing the buffer if it is exhausted
    pub fn obtain(&mut self) -> H::Instance {
        let instance = self.buffer.obtain_descriptor();

        if self.track_active {
            self.active.push(instance.clone());
            self.peak_active = self.peak_active.max(self.active.len());
        }

        instance
    }

    /// Return an instance to the pool
    ///
    /// On rejection the instance is handed back in the error, still owned by
    /// the caller.
    pub fn free(&mut self, instance: H::Instance) -> FreeResult<H::Instance> {
        if self.track_active {
            match self.active.iter().position(|candidate| *candidate == instance) {
                Some(position) => {
                    self.active.remove(position);
                }
                None => {
                    let error = PoolError::instance_not_active(self.key.clone());
                    return Err(FreeError::new(error, instance));
                }
            }
        }

        self.buffer.free_to_descriptor(instance);
        Ok(())
    }

    /// Free every tracked instance, most recently obtained first
    ///
    /// Returns the number of instances freed. Without tracking this is a
    /// no-op and returns zero.
    pub fn free_all(&mut self) -> usize {
        if !self.track_active {
            debug!("Pool '{}' does not track active instances, free_all skipped", self.key);
            return 0;
        }

        let mut freed = 0;
        while let Some(instance) = self.active.pop() {
            self.buffer.free_to_descriptor(instance);
            freed += 1;
        }
        freed
    }

    /// Destroy every tracked instance through the host without returning any
    /// slot to the buffer
    pub fn destroy_active(&mut self) -> usize {
        let host = Rc::clone(self.buffer.host());
        let destroyed = self.active.len();

        for instance in self.active.drain(..) {
            host.destroy(instance);
        }
        self.destroyed_active += destroyed;
        destroyed
    }

    /// Tear the pool down to its cold state
    ///
    /// With `destroy_active` set, tracked instances are destroyed first;
    /// otherwise they stay alive with their holders. Every pooled instance is
    /// destroyed and the next obtain constructs lazily.
    pub fn release(&mut self, destroy_active: bool) {
        let destroyed_active = if destroy_active {
            self.destroy_active()
        } else {
            0
        };

        self.active.clear();
        self.buffer.release();

        debug!(
            "Pool '{}' released ({} active instances destroyed)",
            self.key, destroyed_active
        );
    }

    /// Registry key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the active set is tracked
    pub fn is_tracking(&self) -> bool {
        self.track_active
    }

    /// Tracked instances in acquisition order
    pub fn active(&self) -> &[H::Instance] {
        &self.active
    }

    /// Number of tracked instances checked out
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether the instance is tracked as checked out of this pool
    pub fn is_active(&self, instance: &H::Instance) -> bool {
        self.active.contains(instance)
    }

    /// Instances ready to be handed out
    pub fn available(&self) -> usize {
        self.buffer.available()
    }

    /// Descriptor count of the buffer
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Underlying buffer
    pub fn buffer(&self) -> &PoolBuffer<H> {
        &self.buffer
    }

    /// Get current statistics
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            key: self.key.clone(),
            track_active: self.track_active,
            active: self.active.len(),
            peak_active: self.peak_active,
            destroyed_active: self.destroyed_active,
            buffer: self.buffer.stats(),
        }
    }
}
