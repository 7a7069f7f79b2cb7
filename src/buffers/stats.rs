//! Buffer statistics tracking

use serde::{Deserialize, Serialize};

/// Counters for a [`PoolBuffer`](super::PoolBuffer), plus its shape at the
/// time of the snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferStats {
    /// Instances constructed through the host, pre-warmed ones included
    pub constructed: usize,
    /// Instances destroyed by buffer release or drop
    pub destroyed: usize,
    /// Instances constructed on demand because no slot was available
    pub lazy_constructions: usize,
    /// Descriptors appended on the free side
    pub expansions: usize,
    /// Total obtain calls served
    pub obtains: u64,
    /// Total instances freed back
    pub frees: u64,
    /// Descriptor count, the empty sentinel included
    pub capacity: usize,
    /// Instances ready to be handed out
    pub available: usize,
}

impl BufferStats {
    /// Create new statistics instance
    pub fn new() -> Self {
        Default::default()
    }

    /// Growth events of either kind
    pub fn growth_events(&self) -> usize {
        self.lazy_constructions + self.expansions
    }

    /// Share of obtains served from an existing instance (0.0 to 1.0)
    pub fn reuse_ratio(&self) -> f64 {
        if self.obtains == 0 {
            return 1.0;
        }
        let reused = self.obtains.saturating_sub(self.lazy_constructions as u64);
        reused as f64 / self.obtains as f64
    }

    /// Obtains not yet matched by a free
    pub fn outstanding(&self) -> u64 {
        self.obtains.saturating_sub(self.frees)
    }

    /// Get a summary string of the statistics
    pub fn summary(&self) -> String {
        format!(
            "BufferStats {{ capacity: {}, available: {}, constructed: {}, destroyed: {}, \
             lazy: {}, expansions: {}, reuse: {:.2}% }}",
            self.capacity,
            self.available,
            self.constructed,
            self.destroyed,
            self.lazy_constructions,
            self.expansions,
            self.reuse_ratio() * 100.0
        )
    }
}
