//! Pool configuration

use serde::{Deserialize, Serialize};

use crate::{
    config::DEFAULT_CAPACITY,
    error::{PoolError, Result},
};

/// Configuration for a single pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Registry key of the pool
    pub key: String,
    /// Instances to pre-warm; `None` means [`DEFAULT_CAPACITY`], zero means
    /// a cold pool that constructs on first obtain
    pub initial_count: Option<usize>,
    /// Whether to record obtained instances in the active set
    pub track_active: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            key: "default".to_string(),
            initial_count: None,
            track_active: false,
        }
    }
}

impl PoolConfig {
    /// Create a new configuration with custom key
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Set initial instance count
    pub fn with_initial_count(mut self, count: usize) -> Self {
        self.initial_count = Some(count);
        self
    }

    /// Start cold: nothing is constructed until the first obtain
    pub fn lazy(mut self) -> Self {
        self.initial_count = Some(0);
        self
    }

    /// Set active-set tracking
    pub fn with_track_active(mut self, track: bool) -> Self {
        self.track_active = track;
        self
    }

    /// Instance count the buffer is pre-warmed with
    pub fn effective_initial_count(&self) -> usize {
        self.initial_count.unwrap_or(DEFAULT_CAPACITY)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(PoolError::invalid_parameter("key", "Pool key cannot be empty"));
        }

        Ok(())
    }
}

/// Builder pattern for pool configuration
pub struct PoolConfigBuilder {
    config: PoolConfig,
}

impl PoolConfigBuilder {
    /// Create a new builder
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            config: PoolConfig::new(key),
        }
    }

    /// Set initial count
    pub fn initial_count(mut self, count: usize) -> Self {
        self.config.initial_count = Some(count);
        self
    }

    /// Start cold
    pub fn lazy(mut self) -> Self {
        self.config.initial_count = Some(0);
        self
    }

    /// Enable or disable active-set tracking
    pub fn track_active(mut self, enable: bool) -> Self {
        self.config.track_active = enable;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<PoolConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
