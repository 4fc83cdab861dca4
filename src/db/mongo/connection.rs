//! MongoDB client setup and liveness probing.

use mongodb::Client;
use mongodb::bson::{Document, doc};
use tracing::{debug, info};

use super::cat::MongoCatRepository;
use crate::db::{Database, DbError, DbResult};

/// Where the cat collection lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`
    pub uri: String,
    /// Database name
    pub database: String,
    /// Collection holding cat documents
    pub collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "pokecat_hunt".to_string(),
            collection: "cats".to_string(),
        }
    }
}

/// MongoDB database implementation.
///
/// The driver's `Client` is internally pooled and safe to share across
/// concurrent requests.
pub struct MongoDatabase {
    client: Client,
    cats: MongoCatRepository,
}

impl MongoDatabase {
    /// Connect and verify the server answers a ping.
    ///
    /// The driver connects lazily, so the ping is what actually proves the
    /// store is reachable.
    pub async fn connect(config: &MongoConfig) -> DbResult<Self> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        let db = Self {
            client,
            cats: MongoCatRepository { collection },
        };
        db.ping().await?;

        info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );
        Ok(db)
    }
}

impl Database for MongoDatabase {
    type Cats = MongoCatRepository;

    async fn ping(&self) -> DbResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        debug!("MongoDB ping ok");
        Ok(())
    }

    fn cats(&self) -> &Self::Cats {
        &self.cats
    }
}
