//! Record store abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (MongoDB, in-memory) to be swapped
//! without changing the HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: The `Cat` entity and its wire/storage field mapping
//! - `repository`: Trait definitions for data access
//! - `mongo`: MongoDB driver-backed implementation
//! - `memory`: In-process implementation

mod error;
mod memory;
mod models;
mod mongo;
mod repository;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use memory::{MemoryCatRepository, MemoryDatabase, MemoryHandle};
pub use models::*;
pub use mongo::{MongoCatRepository, MongoConfig, MongoDatabase};
pub use repository::*;
