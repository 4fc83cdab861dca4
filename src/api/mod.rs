mod cors;
mod error;
mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod cors_test;

use std::net::IpAddr;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use error::{ApiError, RequestError};
pub use handlers::{CreateCatRequest, CreateCatResponse, HealthResponse};
pub use routes::{ApiDoc, create_router};
pub use state::AppState;

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Time budget for a single insert
    pub insert_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            insert_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Socket address string for the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecat=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

/// Run the API server with the given configuration.
///
/// The database must already be connected; binding happens only after that.
pub async fn run<D: Database>(config: Config, db: D) -> Result<(), ApiError> {
    let state = AppState::new(db, config.insert_timeout);
    let app = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    info!("API server stopped");
    Ok(())
}
