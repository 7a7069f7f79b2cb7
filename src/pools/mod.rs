//! Pools: one buffer per template plus active-set tracking

pub mod config;
pub mod pool;
pub mod stats;

pub use config::{PoolConfig, PoolConfigBuilder};
pub use pool::Pool;
pub use stats::PoolStats;
