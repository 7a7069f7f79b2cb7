//! Statistics for the pool registry

use serde::{Deserialize, Serialize};

/// Registry-wide counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Total pools created
    pub pools_created: usize,
    /// Total pools removed
    pub pools_removed: usize,
    /// Pools created on demand by `obtain`
    pub lazy_creations: usize,
    /// Pools created by `preload`
    pub preloaded: usize,
}

impl RegistryStats {
    /// Create new statistics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current pool count (created - removed)
    pub fn active_pools(&self) -> usize {
        self.pools_created.saturating_sub(self.pools_removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_pools() {
        let stats = RegistryStats {
            pools_created: 5,
            pools_removed: 2,
            ..Default::default()
        };
        assert_eq!(stats.active_pools(), 3);
        assert_eq!(RegistryStats::new().active_pools(), 0);
    }
}
