//! # Poolkeep - Keyed Object Pools
//!
//! Poolkeep recycles identity-tagged objects instead of constructing and
//! destroying them on every use. Each pool keeps a LIFO stack of ready
//! instances for one template; a registry groups pools by string key over a
//! resource namespace and creates them on demand.
//!
//! ## Features
//!
//! - **LIFO reuse**: the most recently freed instance is handed out first
//! - **Implicit growth**: exhaustion constructs a new instance, never fails
//! - **Active-set tracking**: optional per pool, enables `free_all`
//! - **Keyed registry**: lazy pool creation, bulk free and bulk release
//! - **Injected host**: construction, destruction and activation stay with
//!   the environment through [`ObjectHost`]
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              PoolRegistry (key → Pool)          │
//! │   ResourceLoader ──► templates by namespace     │
//! ├─────────────────────────────────────────────────┤
//! │  Pool                    │  Pool                │
//! │  - active set            │  - active set        │
//! │  - PoolBuffer            │  - PoolBuffer        │
//! │    [d0 d1 d2 .. head]    │    [d0 .. head]      │
//! └─────────────────────────────────────────────────┘
//!           │                         │
//!           ▼                         ▼
//! ┌─────────────────────────────────────────────────┐
//! │   ObjectHost: construct / destroy / activate    │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Everything is single-threaded: the host is shared between pools through
//! `Rc` and no operation blocks.

pub mod buffers;
pub mod error;
pub mod host;
pub mod loader;
pub mod pools;
pub mod registry;

// Main API re-exports
pub use buffers::{BufferStats, Descriptor, PoolBuffer};
pub use error::{FreeError, FreeResult, PoolError, Result};
pub use host::{pool_key, Entity, Identifiable, InMemoryHost, ObjectHost, Prototype};
pub use loader::{ResourceLoader, TemplateCatalog};
pub use pools::{Pool, PoolConfig, PoolConfigBuilder, PoolStats};
pub use registry::{PoolRegistry, RegistryConfig, RegistryStats};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants
pub mod config {
    /// Pre-warm count for buffers created without an explicit count
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Pre-warm count for pools the registry creates on demand
    pub const LAZY_POOL_COUNT: usize = 1;
}
