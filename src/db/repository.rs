//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Cat, CatId},
};

/// Repository for Cat operations.
pub trait CatRepository: Send + Sync {
    /// Get every cat in the store's natural order.
    ///
    /// A document that fails to decode fails the whole call.
    fn find_all(&self) -> impl Future<Output = DbResult<Vec<Cat>>> + Send;

    /// Insert one cat and return the store-assigned id.
    fn insert_one(&self, cat: &Cat) -> impl Future<Output = DbResult<CatId>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync + 'static {
    type Cats: CatRepository;

    /// Verify the store is reachable.
    fn ping(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the cat repository.
    fn cats(&self) -> &Self::Cats;
}
