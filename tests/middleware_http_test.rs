// ABOUTME: HTTP integration tests for the middleware stack
// ABOUTME: Covers request ID generation and propagation plus CORS preflight handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prenatal Fit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;

#[tokio::test]
async fn test_request_id_is_generated() {
    let resources = helpers::test_resources();

    let response = AxumTestRequest::get("/health")
        .send(helpers::app(&resources))
        .await;

    let request_id = response.header("x-request-id").unwrap();
    assert!(request_id.starts_with("req_"));
}

#[tokio::test]
async fn test_incoming_request_id_is_echoed() {
    let resources = helpers::test_resources();

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "client-trace-42")
        .send(helpers::app(&resources))
        .await;

    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("client-trace-42")
    );
}

#[tokio::test]
async fn test_request_id_on_error_responses() {
    let resources = helpers::test_resources();

    let response = AxumTestRequest::get("/api/health/vitals/history")
        .send(helpers::app(&resources))
        .await;

    assert_eq!(response.status(), 401);
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_cors_preflight_allows_identity_header() {
    let resources = helpers::test_resources();

    let response = AxumTestRequest::options("/api/health/check-exercise-safety")
        .header("origin", "https://app.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "x-user-id,content-type")
        .send(helpers::app(&resources))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
    let allowed = response.header("access-control-allow-headers").unwrap();
    assert!(allowed.contains("x-user-id"));
}
