//! Clinician procedures over HTTP.

use axum::http::StatusCode;
use prosper_integration_tests::TestContext;
use serde_json::json;

#[tokio::test]
async fn test_list_ordered_by_name() {
    let ctx = TestContext::new();
    ctx.create_clinician(
        "Dr. Maria Rodriguez",
        "maria@prosper.health",
        "Neurodevelopmental Psychology",
    )
    .await;
    ctx.create_clinician("Dr. James Wilson", "james@prosper.health", "Behavioral Therapy")
        .await;

    let listed = ctx.query("clinician.list", None).await;
    assert_eq!(listed.status, StatusCode::OK);

    let names: Vec<&str> = listed
        .data()
        .as_array()
        .map(|all| all.iter().filter_map(|c| c["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, ["Dr. James Wilson", "Dr. Maria Rodriguez"]);
}

#[tokio::test]
async fn test_list_mixed_case_names_uppercase_first() {
    let ctx = TestContext::new();
    ctx.create_clinician("dr. adams", "adams@prosper.health", "Behavioral Therapy")
        .await;
    ctx.create_clinician("Dr. Zed", "zed@prosper.health", "Behavioral Therapy")
        .await;

    let listed = ctx.query("clinician.list", None).await;
    let names: Vec<&str> = listed
        .data()
        .as_array()
        .map(|all| all.iter().filter_map(|c| c["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, ["Dr. Zed", "dr. adams"]);
}

#[tokio::test]
async fn test_get_by_id_includes_appointments() {
    let ctx = TestContext::new();
    let maria = ctx
        .create_clinician(
            "Dr. Maria Rodriguez",
            "maria@prosper.health",
            "Neurodevelopmental Psychology",
        )
        .await;
    let jane = ctx
        .create_client("Jane Doe", "jane@example.com", 32, "ADHD")
        .await;

    let booked = ctx
        .book("2030-05-01T14:30:00.000Z", &jane["id"], &maria["id"])
        .await;
    assert_eq!(booked.status, StatusCode::OK);

    let fetched = ctx.query("clinician.getById", Some(&maria["id"])).await;
    assert_eq!(fetched.status, StatusCode::OK);

    let data = fetched.data();
    assert_eq!(data["name"], "Dr. Maria Rodriguez");
    assert_eq!(data["specialty"], "Neurodevelopmental Psychology");
    assert_eq!(data["appointments"], json!([booked.data()]));
}

#[tokio::test]
async fn test_get_by_id_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .query(
            "clinician.getById",
            Some(&json!("00000000-0000-4000-8000-000000000000")),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("NOT_FOUND"));
}

#[tokio::test]
async fn test_no_create_procedure() {
    let ctx = TestContext::new();

    let response = ctx
        .mutate(
            "clinician.create",
            &json!({"name": "Dr. X", "email": "x@prosper.health", "specialty": "Y"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
