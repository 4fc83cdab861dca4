//! Database error types.
//!
//! This module provides abstracted error types for store operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic; driver errors are converted
//! at the adapter boundary.

use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Connection error: {message}")]
    #[diagnostic(
        code(pokecat::db::connection_error),
        help("Is MongoDB running? Check --mongo-uri or POKECAT_MONGO_URI.")
    )]
    Connection { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(pokecat::db::database_error))]
    Database { message: String },

    #[error("Failed to decode {field}: {message}")]
    #[diagnostic(code(pokecat::db::decode_error))]
    Decode { field: String, message: String },

    #[error("Operation timed out after {}ms", .0.as_millis())]
    #[diagnostic(code(pokecat::db::timeout))]
    Timeout(Duration),
}

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;
