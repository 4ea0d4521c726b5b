//! RPC route handlers.
//!
//! # Route Structure
//!
//! Mounted under `/trpc`. Queries take their input as URL-encoded JSON in
//! the `input` query parameter; mutations take a JSON body.
//!
//! ```text
//! POST /trpc/client.create                 - Sign up a client
//! GET  /trpc/client.list                   - All clients, newest first
//! GET  /trpc/client.getById?input="<id>"   - Client with appointments
//!
//! GET  /trpc/clinician.list                - All clinicians by name
//! GET  /trpc/clinician.getById?input="<id>" - Clinician with appointments
//!
//! POST /trpc/appointment.create            - Book an appointment
//! GET  /trpc/appointment.listByClientId?input="<id>"
//! GET  /trpc/appointment.listByClinicianId?input="<id>"
//! POST /trpc/appointment.delete            - Cancel an appointment
//! ```
//!
//! Every success is wrapped as `{"result":{"data": ...}}`; failures use the
//! envelope produced by [`AppError`](crate::error::AppError).

pub mod appointment;
pub mod client;
pub mod clinician;

use axum::{
    Json, Router,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::state::AppState;
use crate::store::Store;
use crate::validation::ValidationError;

/// Create the RPC router.
pub fn routes<S: Store>() -> Router<AppState<S>> {
    Router::new()
        .route("/client.create", post(client::create::<S>))
        .route("/client.list", get(client::list::<S>))
        .route("/client.getById", get(client::get_by_id::<S>))
        .route("/clinician.list", get(clinician::list::<S>))
        .route("/clinician.getById", get(clinician::get_by_id::<S>))
        .route("/appointment.create", post(appointment::create::<S>))
        .route(
            "/appointment.listByClientId",
            get(appointment::list_by_client_id::<S>),
        )
        .route(
            "/appointment.listByClinicianId",
            get(appointment::list_by_clinician_id::<S>),
        )
        .route("/appointment.delete", post(appointment::delete::<S>))
}

/// Successful procedure output.
#[derive(Debug, Serialize)]
pub struct RpcResponse<T> {
    result: RpcResult<T>,
}

#[derive(Debug, Serialize)]
struct RpcResult<T> {
    data: T,
}

impl<T> RpcResponse<T> {
    pub const fn new(data: T) -> Self {
        Self {
            result: RpcResult { data },
        }
    }
}

impl<T: Serialize> IntoResponse for RpcResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Query string of an RPC query.
#[derive(Debug, Default, Deserialize)]
pub struct RpcQuery {
    /// URL-decoded JSON input.
    pub input: Option<String>,
}

impl RpcQuery {
    /// Decode the JSON carried in `input`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if `input` is absent or does not decode as `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ValidationError> {
        let raw = self
            .input
            .as_deref()
            .ok_or_else(|| ValidationError::MalformedInput("missing input".to_owned()))?;
        serde_json::from_str(raw).map_err(|e| ValidationError::MalformedInput(e.to_string()))
    }
}

/// Unwrap a mutation body, turning extractor rejections into validation errors.
///
/// # Errors
///
/// Returns `MalformedInput` with the rejection text.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ValidationError::MalformedInput(rejection.body_text()))
}

/// Unwrap a query string, turning extractor rejections into validation errors.
///
/// # Errors
///
/// Returns `MalformedInput` with the rejection text.
pub fn query_input(
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> Result<RpcQuery, ValidationError> {
    query
        .map(|Query(query)| query)
        .map_err(|rejection| ValidationError::MalformedInput(rejection.body_text()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::Uri;

    use super::*;

    #[test]
    fn test_query_input_rejection_is_malformed_input() {
        let uri: Uri = "/trpc/client.getById?input=%22a%22&input=%22b%22".parse().unwrap();
        let err = query_input(Query::try_from_uri(&uri)).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedInput(msg) if msg.contains("input")));
    }

    #[test]
    fn test_rpc_response_envelope() {
        let value = serde_json::to_value(RpcResponse::new(vec![1, 2])).unwrap();
        assert_eq!(value, serde_json::json!({"result": {"data": [1, 2]}}));
    }

    #[test]
    fn test_decode_string_input() {
        let query = RpcQuery {
            input: Some("\"abc\"".to_owned()),
        };
        assert_eq!(query.decode::<String>().unwrap(), "abc");
    }

    #[test]
    fn test_decode_missing_or_invalid_input() {
        assert!(matches!(
            RpcQuery::default().decode::<String>().unwrap_err(),
            ValidationError::MalformedInput(_)
        ));

        let query = RpcQuery {
            input: Some("{not json".to_owned()),
        };
        assert!(matches!(
            query.decode::<String>().unwrap_err(),
            ValidationError::MalformedInput(_)
        ));
    }
}
