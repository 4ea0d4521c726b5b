//! Health checks, request ids and CORS.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use prosper_integration_tests::{TEST_ORIGIN, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_liveness() {
    let ctx = TestContext::new();

    let response = ctx.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_readiness_with_memory_store() {
    let ctx = TestContext::new();

    let response = ctx.get("/health/ready").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_request_id_generated_and_propagated() {
    let ctx = TestContext::new();

    let generated = ctx.get("/health").await;
    assert!(generated.headers.contains_key("x-request-id"));

    let propagated = ctx
        .send(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-abc")
                .body(Body::empty()),
        )
        .await;
    assert_eq!(propagated.headers["x-request-id"], "trace-abc");
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let ctx = TestContext::new();

    let response = ctx
        .send(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/trpc/client.create")
                .header(header::ORIGIN, TEST_ORIGIN)
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty()),
        )
        .await;

    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        TEST_ORIGIN
    );
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_unknown_procedure() {
    let ctx = TestContext::new();

    let response = ctx.query("client.nope", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
