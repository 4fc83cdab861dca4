//! API route configuration.

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::cors::cors;
use super::handlers::{self, CreateCatRequest, CreateCatResponse, HealthResponse};
use super::state::AppState;
use crate::db::{Cat, Database};

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PokeCat API",
        version = "0.1.0",
        description = "Catalog of collectible cats for PokeCat Hunt",
        license(name = "GPL-2.0")
    ),
    paths(handlers::health, handlers::list_cats, handlers::create_cat),
    components(schemas(HealthResponse, Cat, CreateCatRequest, CreateCatResponse)),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "cats", description = "Cat catalog endpoints")
    )
)]
pub struct ApiDoc;

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Create the API router with OpenAPI documentation
///
/// CORS is the outermost layer, so it sees preflights and fallbacks too.
pub fn create_router<D: Database>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let routes = routes!(D => {
        get "/health" => handlers::health,
        get "/api/cats" => handlers::list_cats,
        post "/api/cats" => handlers::create_cat,
    });

    routes
        .with_state(state)
        .merge(Scalar::with_url("/docs", api))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors))
}
