//! Tests for the cross-origin middleware.

use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
use crate::api::{AppState, create_router};
use crate::db::{MemoryDatabase, MemoryHandle};

fn test_app() -> (axum::Router, MemoryHandle) {
    let db = MemoryDatabase::new();
    let handle = db.handle();
    (
        create_router(AppState::new(db, Duration::from_secs(5))),
        handle,
    )
}

fn assert_cors_headers(headers: &HeaderMap) {
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOW_ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], ALLOW_METHODS);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOW_HEADERS);
}

#[test]
fn header_values_are_the_permissive_set() {
    assert_eq!(ALLOW_ORIGIN, "*");
    assert_eq!(ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS");
    assert_eq!(ALLOW_HEADERS, "Content-Type, Authorization");
}

#[tokio::test]
async fn preflight_on_any_path_returns_empty_204() {
    for uri in ["/api/cats", "/does/not/exist", "/"] {
        let (app, handle) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(uri)
                    .header("origin", "http://localhost:5173")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT, "uri: {uri}");
        assert_cors_headers(response.headers());
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
        assert_eq!(handle.find_all_calls(), 0);
        assert_eq!(handle.insert_calls(), 0);
    }
}

#[tokio::test]
async fn preflight_skips_handlers_even_when_store_is_down() {
    let (app, handle) = test_app();
    handle.set_available(false);

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/cats")
                .body(Body::from(r#"{"name":"x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn every_response_carries_cors_headers() {
    let (app, handle) = test_app();

    let requests = vec![
        // 200
        Request::builder()
            .uri("/api/cats")
            .body(Body::empty())
            .unwrap(),
        // 201
        Request::builder()
            .method("POST")
            .uri("/api/cats")
            .body(Body::from(
                r#"{"name":"Tabby","rarity":"common","iconUrl":"https://x/t.png"}"#,
            ))
            .unwrap(),
        // 400
        Request::builder()
            .method("POST")
            .uri("/api/cats")
            .body(Body::from("{"))
            .unwrap(),
        // 404
        Request::builder()
            .uri("/nowhere")
            .body(Body::empty())
            .unwrap(),
        // 405
        Request::builder()
            .method("PUT")
            .uri("/api/cats")
            .body(Body::empty())
            .unwrap(),
    ];

    for request in requests {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_cors_headers(response.headers());
    }

    // 500
    handle.set_available(false);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/cats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors_headers(response.headers());
}
