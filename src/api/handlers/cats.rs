//! Cat catalog handlers.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::api::{AppState, RequestError};
use crate::db::{Cat, CatField, CatRepository, Database, DbError};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Create cat request DTO
///
/// The icon has already been uploaded to object storage; only its URL is sent.
/// Only a JSON object is accepted; keys come from [`CatField::wire_name`].
#[derive(Debug, ToSchema)]
pub struct CreateCatRequest {
    /// Display name
    #[schema(example = "Mimikyu")]
    pub name: Option<String>,
    /// Rarity tier
    #[schema(example = "rare")]
    pub rarity: Option<String>,
    /// URL returned by the storage upload
    #[schema(rename = "iconUrl", example = "https://storage.example.com/cats/mimikyu.png")]
    pub icon_url: Option<String>,
}

impl CreateCatRequest {
    /// Parse a request body into a candidate cat.
    ///
    /// Parsed by hand so a missing or odd Content-Type is not a rejection.
    pub fn parse(body: &[u8]) -> Result<Cat, RequestError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| RequestError::InvalidBody {
            reason: e.to_string(),
        })?;

        let Value::Object(obj) = value else {
            return Err(RequestError::InvalidBody {
                reason: "expected a JSON object".to_string(),
            });
        };

        Cat::from_json_object(&obj).map_err(|field| RequestError::InvalidBody {
            reason: format!("{} must be a string", field.wire_name()),
        })
    }
}

/// Create cat response DTO
#[derive(Debug, ToSchema)]
pub struct CreateCatResponse {
    #[schema(example = "Cat created successfully")]
    pub message: String,
    /// Store-assigned identifier
    #[schema(example = "665f1c2ab3e4d5f6a7b8c9d0")]
    pub id: String,
    #[schema(rename = "iconUrl", example = "https://storage.example.com/cats/mimikyu.png")]
    pub icon_url: String,
}

impl Serialize for CreateCatResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("message", &self.message)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry(CatField::IconUrl.wire_name(), &self.icon_url)?;
        map.end()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all cats
///
/// Returns every cat in the store's natural order
#[utoipa::path(
    get,
    path = "/api/cats",
    tag = "cats",
    responses(
        (status = 200, description = "List of cats", body = Vec<Cat>),
        (status = 500, description = "Store failure", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
pub async fn list_cats<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<Cat>>, RequestError> {
    let cats = state
        .db()
        .cats()
        .find_all()
        .await
        .map_err(RequestError::FetchFailed)?;

    Ok(Json(cats))
}

/// Create a new cat
///
/// Persists a cat whose icon has already been uploaded
#[utoipa::path(
    post,
    path = "/api/cats",
    tag = "cats",
    request_body = CreateCatRequest,
    responses(
        (status = 201, description = "Cat created", body = CreateCatResponse),
        (status = 400, description = "Malformed body or missing fields", body = String, content_type = "text/plain"),
        (status = 500, description = "Store failure or timeout", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state, body))]
pub async fn create_cat<D: Database>(
    State(state): State<AppState<D>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateCatResponse>), RequestError> {
    let cat = CreateCatRequest::parse(&body)?;
    if !cat.missing_fields().is_empty() {
        return Err(RequestError::MissingFields);
    }

    let budget = state.insert_timeout();
    let id = tokio::time::timeout(budget, state.db().cats().insert_one(&cat))
        .await
        .unwrap_or(Err(DbError::Timeout(budget)))
        .map_err(RequestError::InsertFailed)?;

    info!(id = %id, name = %cat.name, rarity = %cat.rarity, "Cat created");

    Ok((
        StatusCode::CREATED,
        Json(CreateCatResponse {
            message: "Cat created successfully".to_string(),
            id,
            icon_url: cat.icon_url,
        }),
    ))
}
