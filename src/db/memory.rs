//! In-process implementation of the database traits.
//!
//! Keeps documents in insertion order behind a mutex, in the same storage
//! shape the MongoDB backend writes, and decodes them on read. Availability
//! and latency can be toggled at runtime, which lets tests exercise store
//! outages and slow writes without a real server.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use mongodb::bson::Document;
use mongodb::bson::oid::ObjectId;

use crate::db::{Cat, CatId, CatRepository, Database, DbError, DbResult};

#[derive(Default)]
struct Shared {
    docs: Mutex<Vec<Document>>,
    unavailable: AtomicBool,
    latency_ms: AtomicU64,
    find_all_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

/// In-memory cat repository.
pub struct MemoryCatRepository {
    shared: Arc<Shared>,
}

impl MemoryCatRepository {
    async fn gate(&self) -> DbResult<()> {
        let latency = self.shared.latency_ms.load(Ordering::SeqCst);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        if self.shared.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Connection {
                message: "in-memory store is unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl Shared {
    fn lock(&self) -> DbResult<MutexGuard<'_, Vec<Document>>> {
        self.docs.lock().map_err(|e| DbError::Database {
            message: format!("Failed to acquire store lock: {}", e),
        })
    }
}

impl CatRepository for MemoryCatRepository {
    async fn find_all(&self) -> DbResult<Vec<Cat>> {
        self.shared.find_all_calls.fetch_add(1, Ordering::SeqCst);
        self.gate().await?;
        self.shared.lock()?.iter().map(Cat::from_document).collect()
    }

    async fn insert_one(&self, cat: &Cat) -> DbResult<CatId> {
        self.shared.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.gate().await?;
        let id = ObjectId::new();
        let mut doc = cat.to_document();
        doc.insert("_id", id);
        self.shared.lock()?.push(doc);
        Ok(id.to_hex())
    }
}

/// In-memory database.
///
/// Useful for tests and for running the server without MongoDB.
pub struct MemoryDatabase {
    cats: MemoryCatRepository,
}

impl Default for MemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self {
            cats: MemoryCatRepository {
                shared: Arc::new(Shared::default()),
            },
        }
    }

    /// Returns a handle sharing this store's controls and counters.
    ///
    /// The database itself moves into the server state; tests keep the handle.
    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            shared: Arc::clone(&self.cats.shared),
        }
    }
}

impl Database for MemoryDatabase {
    type Cats = MemoryCatRepository;

    async fn ping(&self) -> DbResult<()> {
        self.cats.gate().await
    }

    fn cats(&self) -> &Self::Cats {
        &self.cats
    }
}

/// Remote control for a [`MemoryDatabase`].
#[derive(Clone)]
pub struct MemoryHandle {
    shared: Arc<Shared>,
}

impl MemoryHandle {
    /// When unavailable every call fails with a connection error and stored
    /// data is left untouched.
    pub fn set_available(&self, available: bool) {
        self.shared
            .unavailable
            .store(!available, Ordering::SeqCst);
    }

    /// Delay every call before it touches stored data.
    pub fn set_latency(&self, latency: Duration) {
        self.shared
            .latency_ms
            .store(
                u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                Ordering::SeqCst,
            );
    }

    /// Store a document as-is, bypassing the cat encoding.
    ///
    /// Lets tests seed documents another writer may have left behind.
    pub fn insert_raw(&self, doc: Document) -> DbResult<()> {
        self.shared.lock()?.push(doc);
        Ok(())
    }

    /// Number of `find_all` calls that reached the store.
    pub fn find_all_calls(&self) -> usize {
        self.shared.find_all_calls.load(Ordering::SeqCst)
    }

    /// Number of `insert_one` calls that reached the store.
    pub fn insert_calls(&self) -> usize {
        self.shared.insert_calls.load(Ordering::SeqCst)
    }
}
