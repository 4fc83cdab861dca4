//! System health handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::Database;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "ok")]
    pub status: String,
}

/// Health check endpoint
///
/// Pings the record store and reports whether it is reachable
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health<D: Database>(
    State(state): State<AppState<D>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.db().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                }),
            )
        }
    }
}
