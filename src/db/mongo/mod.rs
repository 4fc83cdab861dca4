//! MongoDB implementation of the database traits.
//!
//! This module provides a MongoDB-backed implementation of the repository
//! traits defined in the parent module.

mod cat;
mod connection;

#[cfg(all(test, feature = "mongo-tests"))]
mod connection_test;

pub use cat::MongoCatRepository;
pub use connection::{MongoConfig, MongoDatabase};
