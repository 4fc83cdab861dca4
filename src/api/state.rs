//! Application state for the API server.

use std::sync::Arc;
use std::time::Duration;

use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so handlers run unchanged against MongoDB in
/// production and the in-memory store in tests. The store is injected via
/// the constructor, never created here.
pub struct AppState<D: Database> {
    db: Arc<D>,
    insert_timeout: Duration,
}

// Manual Clone impl - only the Arc needs cloning, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            insert_timeout: self.insert_timeout,
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create a new AppState with the given database and insert time budget.
    pub fn new(db: D, insert_timeout: Duration) -> Self {
        Self {
            db: Arc::new(db),
            insert_timeout,
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Upper bound on a single insert before it is abandoned.
    pub fn insert_timeout(&self) -> Duration {
        self.insert_timeout
    }
}
