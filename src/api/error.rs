//! API error types.
//!
//! `RequestError` is what handlers return; it converts into a plain-text
//! response whose body never carries the underlying store error. `ApiError`
//! covers failures of the server itself.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, error};

use crate::db::DbError;

/// Errors that end a single request.
#[derive(Error, Diagnostic, Debug)]
pub enum RequestError {
    #[error("Invalid request body")]
    #[diagnostic(code(pokecat::api::invalid_body))]
    InvalidBody { reason: String },

    #[error("Missing required fields")]
    #[diagnostic(code(pokecat::api::missing_fields))]
    MissingFields,

    #[error("Error fetching cats data")]
    #[diagnostic(code(pokecat::api::fetch_failed))]
    FetchFailed(#[source] DbError),

    #[error("Failed to insert cat")]
    #[diagnostic(code(pokecat::api::insert_failed))]
    InsertFailed(#[source] DbError),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::InvalidBody { .. } | RequestError::MissingFields => StatusCode::BAD_REQUEST,
            RequestError::FetchFailed(_) | RequestError::InsertFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match &self {
            RequestError::InvalidBody { reason } => debug!(%reason, "Rejected request body"),
            RequestError::MissingFields => debug!("Rejected request with missing fields"),
            RequestError::FetchFailed(e) => error!(error = %e, "Failed to list cats"),
            RequestError::InsertFailed(e) => error!(error = %e, "Failed to insert cat"),
        }

        (self.status(), self.to_string()).into_response()
    }
}

/// Errors that stop the server.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(pokecat::api::bind),
        help("Is another process already listening on this port? Try --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(pokecat::api::serve))]
    Serve(#[source] std::io::Error),
}
