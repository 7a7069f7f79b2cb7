//! Error types and handling for poolkeep

use std::fmt;

/// Result type alias for pool operations
pub type Result<T> = std::result::Result<T, PoolError>;

/// Result of handing an instance back to a pool
pub type FreeResult<I> = std::result::Result<(), FreeError<I>>;

/// Errors reported by buffers, pools and the registry
///
/// Exhaustion is never an error: buffers grow instead. Everything here is
/// either a caller precondition violation or a failure of an external
/// collaborator (the resource loader).
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    /// No pool is registered under the key
    #[error("Pool not found: {key}")]
    PoolNotFound { key: String },

    /// Instance was freed to a tracking pool that does not hold it as active
    #[error("Instance not active in pool: {pool}")]
    InstanceNotActive { pool: String },

    /// Pool still has tracked instances checked out
    #[error("Pool busy: {key} has {active} active instances")]
    PoolBusy { key: String, active: usize },

    /// The loader has no template for the key
    #[error("Resource not found: {namespace}/{key}")]
    ResourceNotFound { namespace: String, key: String },

    /// Invalid parameters or configuration
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Resource loader failure
    #[error("Loader error: {message}")]
    Loader {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PoolError {
    /// Create a pool not found error
    pub fn pool_not_found(key: impl Into<String>) -> Self {
        Self::PoolNotFound { key: key.into() }
    }

    /// Create an instance not active error
    pub fn instance_not_active(pool: impl Into<String>) -> Self {
        Self::InstanceNotActive { pool: pool.into() }
    }

    /// Create a pool busy error
    pub fn pool_busy(key: impl Into<String>, active: usize) -> Self {
        Self::PoolBusy {
            key: key.into(),
            active,
        }
    }

    /// Create a resource not found error
    pub fn resource_not_found(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a loader error without an underlying cause
    pub fn loader(message: impl Into<String>) -> Self {
        Self::Loader {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying loader failure
    pub fn loader_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Loader {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the error signals a caller lifecycle bug rather than a
    /// collaborator failure
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::PoolNotFound { .. } | Self::InstanceNotActive { .. } | Self::PoolBusy { .. }
        )
    }
}

/// A rejected free: the error plus the instance, which stays with the caller
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct FreeError<I: fmt::Debug> {
    /// Why the free was rejected
    pub error: PoolError,
    /// The instance that was not taken back
    pub instance: I,
}

impl<I: fmt::Debug> FreeError<I> {
    /// Pair an error with the rejected instance
    pub fn new(error: PoolError, instance: I) -> Self {
        Self { error, instance }
    }

    /// Reason the free was rejected
    pub fn error(&self) -> &PoolError {
        &self.error
    }

    /// Take the instance back
    pub fn into_instance(self) -> I {
        self.instance
    }

    /// Split into error and instance
    pub fn into_parts(self) -> (PoolError, I) {
        (self.error, self.instance)
    }
}

impl<I: fmt::Debug> From<FreeError<I>> for PoolError {
    fn from(err: FreeError<I>) -> Self {
        err.error
    }
}
