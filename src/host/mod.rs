//! Host capabilities the pools are built on
//!
//! Object construction, destruction and activation belong to the host
//! environment. This module defines the seams and ships an in-process host.

pub mod memory;
pub mod traits;

pub use memory::{Entity, InMemoryHost, Prototype};
pub use traits::{pool_key, Identifiable, ObjectHost};
