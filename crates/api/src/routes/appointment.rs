//! `appointment.*` handlers.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use super::{RpcQuery, RpcResponse, json_body, query_input};
use crate::error::AppError;
use crate::models::{Appointment, AppointmentWithClient, AppointmentWithClinician};
use crate::services::AppointmentService;
use crate::state::AppState;
use crate::store::Store;
use crate::validation::{CreateAppointmentInput, DeleteAppointmentInput};

/// POST /trpc/appointment.create
///
/// # Errors
///
/// Returns `AppError` if the date is invalid or a referenced record is missing.
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateAppointmentInput>, JsonRejection>,
) -> Result<RpcResponse<Appointment>, AppError> {
    let input = json_body(body)?;
    let appointment = AppointmentService::new(state.store()).create(input).await?;
    Ok(RpcResponse::new(appointment))
}

/// GET /trpc/appointment.listByClientId?input="<clientId>"
///
/// # Errors
///
/// Returns `AppError` if the input is missing or the query fails.
pub async fn list_by_client_id<S: Store>(
    State(state): State<AppState<S>>,
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> Result<RpcResponse<Vec<AppointmentWithClinician>>, AppError> {
    let client_id: String = query_input(query)?.decode()?;
    let appointments = AppointmentService::new(state.store())
        .list_by_client_id(&client_id)
        .await?;
    Ok(RpcResponse::new(appointments))
}

/// GET /trpc/appointment.listByClinicianId?input="<clinicianId>"
///
/// # Errors
///
/// Returns `AppError` if the input is missing or the query fails.
pub async fn list_by_clinician_id<S: Store>(
    State(state): State<AppState<S>>,
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> Result<RpcResponse<Vec<AppointmentWithClient>>, AppError> {
    let clinician_id: String = query_input(query)?.decode()?;
    let appointments = AppointmentService::new(state.store())
        .list_by_clinician_id(&clinician_id)
        .await?;
    Ok(RpcResponse::new(appointments))
}

/// POST /trpc/appointment.delete
///
/// # Errors
///
/// Returns `AppError` if no appointment matches.
pub async fn delete<S: Store>(
    State(state): State<AppState<S>>,
    body: Result<Json<DeleteAppointmentInput>, JsonRejection>,
) -> Result<RpcResponse<Appointment>, AppError> {
    let input = json_body(body)?;
    let appointment = AppointmentService::new(state.store()).delete(input).await?;
    Ok(RpcResponse::new(appointment))
}
