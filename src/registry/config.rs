//! Registry configuration

use serde::{Deserialize, Serialize};

use crate::{
    config::LAZY_POOL_COUNT,
    error::{PoolError, Result},
};

/// Configuration for a [`PoolRegistry`](super::PoolRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Resource namespace templates are loaded from
    pub namespace: String,
    /// Pre-warm count for pools the registry creates on demand
    pub lazy_initial_count: usize,
    /// Active-set tracking for pools the registry creates on demand
    pub lazy_track_active: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            lazy_initial_count: LAZY_POOL_COUNT,
            lazy_track_active: true,
        }
    }
}

impl RegistryConfig {
    /// Create a new configuration for a namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Set the pre-warm count for on-demand pools
    pub fn with_lazy_initial_count(mut self, count: usize) -> Self {
        self.lazy_initial_count = count;
        self
    }

    /// Set active-set tracking for on-demand pools
    pub fn with_lazy_track_active(mut self, track: bool) -> Self {
        self.lazy_track_active = track;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.namespace.contains('\0') {
            return Err(PoolError::invalid_parameter(
                "namespace",
                "Namespace cannot contain NUL bytes",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::new("prefabs/pooled");
        assert_eq!(config.lazy_initial_count, LAZY_POOL_COUNT);
        assert!(config.lazy_track_active);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nul() {
        assert!(RegistryConfig::new("pre\0fabs").validate().is_err());
    }

    #[test]
    fn test_config_from_json() {
        let config: RegistryConfig = serde_json::from_str(
            r#"{"namespace":"fx","lazy_initial_count":4,"lazy_track_active":false}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            RegistryConfig::new("fx")
                .with_lazy_initial_count(4)
                .with_lazy_track_active(false)
        );
    }
}
