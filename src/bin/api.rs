//! PokeCat API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.
//!
//! Startup is all-or-nothing: if the store cannot be reached, or the port
//! cannot be bound, the process exits with a diagnostic before serving.

use std::net::IpAddr;
use std::time::Duration;

use clap::Parser;
use miette::Diagnostic;
use pokecat::api::{self, ApiError, Config};
use pokecat::db::{DbError, MemoryDatabase, MongoConfig, MongoDatabase};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(pokecat::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(pokecat::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "pokecat-api")]
#[command(author, version, about = "PokeCat catalog API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, env = "POKECAT_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "POKECAT_PORT", default_value = "5000")]
    port: u16,

    /// MongoDB connection string
    #[arg(long, env = "POKECAT_MONGO_URI", default_value = "mongodb://localhost:27017")]
    mongo_uri: String,

    /// Database name
    #[arg(long, env = "POKECAT_DATABASE", default_value = "pokecat_hunt")]
    database: String,

    /// Collection holding cat records
    #[arg(long, env = "POKECAT_COLLECTION", default_value = "cats")]
    collection: String,

    /// Seconds to wait for an insert before giving up
    #[arg(long, env = "POKECAT_INSERT_TIMEOUT_SECS", default_value = "5")]
    insert_timeout_secs: u64,

    /// Keep records in process memory instead of MongoDB (lost on exit)
    #[arg(long)]
    in_memory: bool,
}

impl Cli {
    fn api_config(&self) -> Config {
        Config {
            host: self.host,
            port: self.port,
            insert_timeout: Duration::from_secs(self.insert_timeout_secs),
        }
    }

    fn mongo_config(&self) -> MongoConfig {
        MongoConfig {
            uri: self.mongo_uri.clone(),
            database: self.database.clone(),
            collection: self.collection.clone(),
        }
    }
}

async fn start(cli: Cli) -> Result<(), BinaryError> {
    let config = cli.api_config();

    if cli.in_memory {
        warn!("Using in-memory store; records are lost on exit");
        api::run(config, MemoryDatabase::new()).await?;
        return Ok(());
    }

    let mongo = cli.mongo_config();
    info!(uri = %mongo.uri, "Connecting to MongoDB");
    let db = MongoDatabase::connect(&mongo).await?;

    // Pass the abstract Database to the API layer
    api::run(config, db).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    api::init_tracing();

    start(cli).await?;
    Ok(())
}
