//! Integration tests for the Prosper API.
//!
//! Every test drives the full router (middleware included) through
//! `tower::ServiceExt::oneshot` over an in-memory store, so no database or
//! running server is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p prosper-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `clients` - signup, listing and lookup
//! - `clinicians` - directory listing and lookup
//! - `appointments` - booking, listing and cancellation
//! - `health` - liveness, readiness and request ids

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use prosper_api::config::ApiConfig;
use prosper_api::server::build_router;
use prosper_api::state::AppState;
use prosper_api::store::MemoryStore;
use serde_json::Value;
use tower::ServiceExt;

/// Origin the test router allows through CORS.
pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Response captured from a single router call.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `result.data` payload of a successful procedure call.
    #[must_use]
    pub fn data(&self) -> &Value {
        &self.body["result"]["data"]
    }

    /// The `error.code` of a failed procedure call.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.body["error"]["code"].as_str()
    }
}

/// A router over a fresh in-memory store.
pub struct TestContext {
    pub store: MemoryStore,
    router: Router,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Build a router with test configuration and an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the fixed test configuration fails to load.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let config = ApiConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://unused/prosper_test".to_owned()),
            "CORS_ORIGIN" => Some(TEST_ORIGIN.to_owned()),
            _ => None,
        })
        .expect("test configuration is valid");

        let store = MemoryStore::new();
        let router = build_router(AppState::new(config, store.clone()));
        Self { store, router }
    }

    /// Call a query procedure, URL-encoding `input` as JSON.
    pub async fn query(&self, procedure: &str, input: Option<&Value>) -> TestResponse {
        let uri = input.map_or_else(
            || format!("/trpc/{procedure}"),
            |input| {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("input", &input.to_string())
                    .finish();
                format!("/trpc/{procedure}?{query}")
            },
        );
        self.get(&uri).await
    }

    /// Call a mutation procedure with a JSON body.
    pub async fn mutate(&self, procedure: &str, body: &Value) -> TestResponse {
        self.send_body(&format!("/trpc/{procedure}"), body.to_string())
            .await
    }

    /// POST a raw body as JSON, for malformed-input checks.
    pub async fn send_body(&self, uri: &str, body: String) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body)),
        )
        .await
    }

    /// Plain GET.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()))
            .await
    }

    /// Send a prepared request through the router.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body is not JSON.
    #[allow(clippy::expect_used)]
    pub async fn send(&self, request: axum::http::Result<Request<Body>>) -> TestResponse {
        let request = request.expect("valid request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a client through the API and return its `data`.
    ///
    /// # Panics
    ///
    /// Panics if the call does not succeed.
    pub async fn create_client(&self, name: &str, email: &str, age: i64, neurotype: &str) -> Value {
        let response = self
            .mutate(
                "client.create",
                &serde_json::json!({
                    "name": name,
                    "email": email,
                    "age": age,
                    "neurotype": neurotype,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.data().clone()
    }

    /// Register a clinician directly in the store and return its JSON form.
    ///
    /// # Panics
    ///
    /// Panics if the insert fails.
    #[allow(clippy::expect_used)]
    pub async fn create_clinician(&self, name: &str, email: &str, specialty: &str) -> Value {
        use prosper_api::services::ClinicianService;
        use prosper_api::validation::CreateClinicianInput;

        let clinician = ClinicianService::new(&self.store)
            .create(CreateClinicianInput {
                name: name.to_owned(),
                email: email.to_owned(),
                specialty: specialty.to_owned(),
            })
            .await
            .expect("clinician insert");
        serde_json::to_value(clinician).expect("clinician serializes")
    }

    /// Book an appointment through the API.
    pub async fn book(&self, date: &str, client_id: &Value, clinician_id: &Value) -> TestResponse {
        self.mutate(
            "appointment.create",
            &serde_json::json!({
                "date": date,
                "clientId": client_id,
                "clinicianId": clinician_id,
            }),
        )
        .await
    }
}
