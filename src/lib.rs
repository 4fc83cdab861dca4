//! PokeCat catalog service.
//!
//! Stores and lists collectible cat records (name, icon URL, rarity) behind a
//! small JSON HTTP API. `db` holds the record store abstraction and its
//! MongoDB and in-memory backends; `api` holds the axum router, handlers and
//! CORS middleware.

pub mod api;
pub mod db;
