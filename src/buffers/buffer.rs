//! LIFO pool buffer over a growable descriptor list

use std::rc::Rc;

use log::{debug, warn};

use crate::{config::DEFAULT_CAPACITY, host::ObjectHost};

use super::{descriptor::Descriptor, stats::BufferStats};

/// A growable stack of pooled instances for one template
///
/// `head` indexes the most recently freed slot, or is -1 when nothing is
/// available. Slots `0..=head` hold instances ready to be handed out; slots
/// above `head` are empty while their instances are checked out. The
/// descriptor list only grows, except on [`release`](Self::release), and
/// always keeps at least one slot.
#[derive(Debug)]
pub struct PoolBuffer<H: ObjectHost> {
    /// Label used in log output
    label: String,
    /// Host that constructs and destroys instances
    host: Rc<H>,
    /// Template every instance is built from
    template: H::Template,
    /// Slots, oldest first
    descriptors: Vec<Descriptor<H::Instance>>,
    /// Top of the free stack
    head: isize,
    /// Counters
    stats: BufferStats,
}

impl<H: ObjectHost> PoolBuffer<H> {
    /// Create a buffer with `initial_count` pre-warmed instances
    ///
    /// An `initial_count` of zero creates a cold buffer: one empty sentinel
    /// slot and nothing available until the first obtain builds an instance.
    pub fn new(
        label: impl Into<String>,
        host: Rc<H>,
        template: H::Template,
        initial_count: usize,
    ) -> Self {
        let mut buffer = Self {
            label: label.into(),
            host,
            template,
            descriptors: Vec::with_capacity(initial_count.max(1)),
            head: -1,
            stats: BufferStats::new(),
        };

        if initial_count == 0 {
            buffer.descriptors.push(Descriptor::empty());
        } else {
            for _ in 0..initial_count {
                let instance = buffer.construct_instance();
                buffer.host.prepare_for_storage(&instance);
                buffer.descriptors.push(Descriptor::with_instance(instance));
            }
            buffer.head = initial_count as isize - 1;
        }

        debug!(
            "Pool buffer '{}' created with {} pre-warmed instances",
            buffer.label, initial_count
        );
        buffer
    }

    /// Create a buffer pre-warmed with [`DEFAULT_CAPACITY`] instances
    pub fn with_default_capacity(
        label: impl Into<String>,
        host: Rc<H>,
        template: H::Template,
    ) -> Self {
        Self::new(label, host, template, DEFAULT_CAPACITY)
    }

    /// Hand out the most recently freed instance
    ///
    /// When the stack is empty, slot 0 is repurposed and a fresh instance is
    /// constructed into it, so this never fails.
    pub fn obtain_descriptor(&mut self) -> H::Instance {
        if self.head < 0 {
            self.head = 0;
        }

        let index = self.head as usize;
        self.head -= 1;

        let instance = match self.descriptors[index].take() {
            Some(instance) => instance,
            None => {
                let instance = self.construct_instance();
                self.stats.lazy_constructions += 1;
                debug!(
                    "Pool buffer '{}' exhausted, constructed instance into slot {}",
                    self.label, index
                );
                instance
            }
        };

        self.host.prepare_for_use(&instance);
        self.stats.obtains += 1;
        instance
    }

    /// Put an instance back on top of the free stack
    ///
    /// Appends a new slot when every existing slot is already occupied. Each
    /// such expansion is logged as a capacity-tuning signal.
    pub fn free_to_descriptor(&mut self, instance: H::Instance) {
        self.host.prepare_for_storage(&instance);

        self.head += 1;
        let index = self.head as usize;

        if index == self.descriptors.len() {
            self.descriptors.push(Descriptor::with_instance(instance));
            self.stats.expansions += 1;
            warn!(
                "Pool buffer '{}' expanded to {} descriptors (expansion #{})",
                self.label,
                self.descriptors.len(),
                self.stats.expansions
            );
        } else {
            let displaced = self.descriptors[index].set(instance);
            debug_assert!(displaced.is_none(), "free slot above head was occupied");
        }

        self.stats.frees += 1;
    }

    /// Destroy every pooled instance and return to the cold state
    ///
    /// Instances currently checked out are not touched. Afterwards the buffer
    /// holds a single empty sentinel and the next obtain constructs lazily.
    pub fn release(&mut self) {
        let destroyed = self.destroy_pooled();
        self.descriptors.truncate(1);
        self.head = -1;

        debug!(
            "Pool buffer '{}' released, {} instances destroyed",
            self.label, destroyed
        );
    }

    /// Number of descriptors, the empty sentinel included
    pub fn capacity(&self) -> usize {
        self.descriptors.len()
    }

    /// Number of instances ready to be handed out
    pub fn available(&self) -> usize {
        (self.head + 1) as usize
    }

    /// Current top of the free stack, -1 when nothing is available
    pub fn head(&self) -> isize {
        self.head
    }

    /// Whether the next obtain has to construct a new instance
    pub fn is_exhausted(&self) -> bool {
        self.head < 0
    }

    /// Label used in log output
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Template instances are built from
    pub fn template(&self) -> &H::Template {
        &self.template
    }

    /// Host the buffer constructs through
    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    /// Borrow the slots, oldest first
    pub fn descriptors(&self) -> &[Descriptor<H::Instance>] {
        &self.descriptors
    }

    /// Get current statistics
    pub fn stats(&self) -> BufferStats {
        BufferStats {
            capacity: self.capacity(),
            available: self.available(),
            ..self.stats.clone()
        }
    }

    fn construct_instance(&mut self) -> H::Instance {
        self.stats.constructed += 1;
        self.host.construct(&self.template)
    }

    fn destroy_pooled(&mut self) -> usize {
        let mut destroyed = 0;
        for descriptor in &mut self.descriptors {
            if let Some(instance) = descriptor.take() {
                self.host.destroy(instance);
                destroyed += 1;
            }
        }
        self.stats.destroyed += destroyed;
        destroyed
    }
}

impl<H: ObjectHost> Drop for PoolBuffer<H> {
    fn drop(&mut self) {
        self.destroy_pooled();
    }
}
