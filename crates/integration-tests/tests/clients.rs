//! Client procedures over HTTP.

use axum::http::StatusCode;
use prosper_integration_tests::TestContext;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_then_get_by_id() {
    let ctx = TestContext::new();

    let created = ctx
        .create_client("Jane Doe", "jane@example.com", 32, "ADHD")
        .await;
    assert_eq!(created["name"], "Jane Doe");
    assert_eq!(created["email"], "jane@example.com");
    assert_eq!(created["age"], 32);
    assert_eq!(created["neurotype"], "ADHD");
    assert!(created["createdAt"].is_string());

    let fetched = ctx.query("client.getById", Some(&created["id"])).await;
    assert_eq!(fetched.status, StatusCode::OK);

    let data = fetched.data();
    assert_eq!(data["id"], created["id"]);
    assert_eq!(data["name"], "Jane Doe");
    assert_eq!(data["email"], "jane@example.com");
    assert_eq!(data["age"], 32);
    assert_eq!(data["neurotype"], "ADHD");
    assert_eq!(data["appointments"], json!([]));
}

#[tokio::test]
async fn test_create_trims_name_and_email() {
    let ctx = TestContext::new();

    let created = ctx
        .create_client("  John Smith ", " john@example.com ", 28, "Autistic")
        .await;
    assert_eq!(created["name"], "John Smith");
    assert_eq!(created["email"], "john@example.com");
}

#[tokio::test]
async fn test_list_newest_first() {
    let ctx = TestContext::new();

    let first = ctx
        .create_client("Jane Doe", "jane@example.com", 32, "ADHD")
        .await;
    let second = ctx
        .create_client("John Smith", "john@example.com", 28, "Autistic")
        .await;
    let third = ctx.create_client("Sam Lee", "sam@example.com", 45, "Both").await;

    let listed = ctx.query("client.list", None).await;
    assert_eq!(listed.status, StatusCode::OK);

    let ids: Vec<&Value> = listed
        .data()
        .as_array()
        .map(|clients| clients.iter().map(|c| &c["id"]).collect())
        .unwrap_or_default();
    assert_eq!(ids, [&third["id"], &second["id"], &first["id"]]);
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let ctx = TestContext::new();

    let cases = [
        json!({"name": "", "email": "jane@example.com", "age": 32, "neurotype": "ADHD"}),
        json!({"name": "Jane", "email": "jane", "age": 32, "neurotype": "ADHD"}),
        json!({"name": "Jane", "email": "jane@example.com", "age": 0, "neurotype": "ADHD"}),
        json!({"name": "Jane", "email": "jane@example.com", "age": 121, "neurotype": "ADHD"}),
        json!({"name": "Jane", "email": "jane@example.com", "age": 32.5, "neurotype": "ADHD"}),
        json!({"name": "Jane", "email": "jane@example.com", "age": 32, "neurotype": "adhd"}),
        json!({"name": "Jane", "email": "jane@example.com", "neurotype": "ADHD"}),
    ];

    for input in cases {
        let response = ctx.mutate("client.create", &input).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{input}");
        assert_eq!(response.error_code(), Some("BAD_REQUEST"), "{input}");
        assert!(response.body["error"]["message"].is_string());
    }

    let listed = ctx.query("client.list", None).await;
    assert_eq!(listed.data(), &json!([]));
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let ctx = TestContext::new();

    let response = ctx
        .send_body("/trpc/client.create", "{\"name\": ".to_owned())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("BAD_REQUEST"));
}

#[tokio::test]
async fn test_get_by_id_not_found() {
    let ctx = TestContext::new();

    let unknown = ctx
        .query(
            "client.getById",
            Some(&json!("00000000-0000-4000-8000-000000000000")),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.error_code(), Some("NOT_FOUND"));

    let malformed = ctx.query("client.getById", Some(&json!("not-an-id"))).await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_by_id_requires_input() {
    let ctx = TestContext::new();

    let response = ctx.query("client.getById", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("BAD_REQUEST"));
}

#[tokio::test]
async fn test_unparseable_query_string_uses_error_envelope() {
    let ctx = TestContext::new();

    for procedure in [
        "client.getById",
        "clinician.getById",
        "appointment.listByClientId",
        "appointment.listByClinicianId",
    ] {
        let response = ctx
            .get(&format!("/trpc/{procedure}?input=%22a%22&input=%22b%22"))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{procedure}");
        assert_eq!(response.error_code(), Some("BAD_REQUEST"), "{procedure}");
    }
}
