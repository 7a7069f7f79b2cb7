//! Statistics for pools

use serde::{Deserialize, Serialize};

use crate::buffers::BufferStats;

/// Snapshot of a [`Pool`](super::Pool)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Registry key
    pub key: String,
    /// Whether the active set is tracked
    pub track_active: bool,
    /// Tracked instances currently checked out
    pub active: usize,
    /// Highest tracked active count seen
    pub peak_active: usize,
    /// Checked-out instances destroyed on release
    pub destroyed_active: usize,
    /// Underlying buffer counters
    pub buffer: BufferStats,
}

impl PoolStats {
    /// Pool utilization (0.0 to 1.0): tracked active instances over all
    /// instances the pool knows about
    ///
    /// `None` for untracked pools, which have no record of what is out.
    pub fn utilization(&self) -> Option<f64> {
        if !self.track_active {
            return None;
        }
        let known = self.active + self.buffer.available;
        if known == 0 {
            return Some(0.0);
        }
        Some(self.active as f64 / known as f64)
    }

    /// Instances destroyed by this pool, pooled and checked-out alike
    pub fn total_destroyed(&self) -> usize {
        self.buffer.destroyed + self.destroyed_active
    }

    /// Get a summary string of the statistics
    pub fn summary(&self) -> String {
        format!(
            "PoolStats {{ key: {}, active: {}, peak: {}, destroyed_active: {}, \
             tracking: {}, {} }}",
            self.key,
            self.active,
            self.peak_active,
            self.destroyed_active,
            self.track_active,
            self.buffer.summary()
        )
    }
}
