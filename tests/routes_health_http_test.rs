// ABOUTME: HTTP integration tests for health check routes and shared middleware
// ABOUTME: Tests the welcome banner, liveness, readiness, request ids and CORS preflight
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for health check routes
//!
//! This test suite validates that the health endpoints are registered in the
//! full router and that every response carries the shared middleware headers.

mod common;
mod helpers;

use fridge_food_server::server;
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

// ============================================================================
// GET / - Welcome
// ============================================================================

#[tokio::test]
async fn test_root_returns_welcome_text() {
    let app = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/").send(app).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "Welcome to the My Fridge Food API!");
}

// ============================================================================
// GET /health and /ready
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/health").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_success() {
    let app = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/api/ready").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_health_ignores_store_but_ready_does_not() {
    let database = common::create_broken_database().await.unwrap();
    let app = server::build_router(common::create_test_resources(database));

    let health = AxumTestRequest::get("/health").send(app.clone()).await;
    assert_eq!(health.status(), 200);

    // The probe query needs the schema
    let ready = AxumTestRequest::get("/ready").send(app).await;
    assert_eq!(ready.status(), 503);
    let body: Value = ready.json();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/api/unknown").send(app).await;

    assert_eq!(response.status(), 404);
}

// ============================================================================
// Middleware
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/health").send(app).await;

    let request_id = response.header("x-request-id").unwrap();
    assert_eq!(request_id.len(), 36);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::get("/api/ingredients")
        .header("x-request-id", "fridge-test-42")
        .send(app)
        .await;

    assert_eq!(response.header("x-request-id"), Some("fridge-test-42"));
}

#[tokio::test]
async fn test_cors_preflight_for_matcher() {
    let app = common::create_test_router().await.unwrap();

    let response = AxumTestRequest::options("/api/recipes")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    let methods = response.header("access-control-allow-methods").unwrap();
    assert!(methods.contains("POST"));
    assert_eq!(response.header("access-control-max-age"), Some("3600"));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = common::create_test_router().await.unwrap();
    let padding = "x".repeat(70 * 1024);
    let body = format!(r#"{{"ingredients": ["{padding}"]}}"#);

    let response = AxumTestRequest::post("/api/recipes")
        .header("content-type", "application/json")
        .header("content-length", &body.len().to_string())
        .raw_body(&body)
        .send(app)
        .await;

    assert_eq!(response.status(), 413);
    let error: Value = response.json();
    assert_eq!(error["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_oversized_body_without_length_header_is_rejected() {
    let app = common::create_test_router().await.unwrap();
    let padding = "x".repeat(70 * 1024);
    let body = format!(r#"{{"ingredients": ["{padding}"]}}"#);

    let response = AxumTestRequest::post("/recipes")
        .header("content-type", "application/json")
        .raw_body(&body)
        .send(app)
        .await;

    assert_eq!(response.status(), 413);
}
