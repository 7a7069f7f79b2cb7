//! Pool registry keyed by resource identity
//!
//! Groups pools under a resource namespace, creates them on demand and
//! routes frees back to the pool an instance's key points at.

pub mod config;
pub mod manager;
pub mod stats;

pub use config::RegistryConfig;
pub use manager::PoolRegistry;
pub use stats::RegistryStats;
