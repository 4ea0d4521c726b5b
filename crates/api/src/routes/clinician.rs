//! `clinician.*` handlers.

use axum::extract::{Query, State, rejection::QueryRejection};

use super::{RpcQuery, RpcResponse, query_input};
use crate::error::AppError;
use crate::models::{Clinician, ClinicianWithAppointments};
use crate::services::ClinicianService;
use crate::state::AppState;
use crate::store::Store;

/// GET /trpc/clinician.list
///
/// # Errors
///
/// Returns `AppError` if the query fails.
pub async fn list<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<RpcResponse<Vec<Clinician>>, AppError> {
    let clinicians = ClinicianService::new(state.store()).list().await?;
    Ok(RpcResponse::new(clinicians))
}

/// GET /trpc/clinician.getById?input="<id>"
///
/// # Errors
///
/// Returns `AppError` if the input is missing or no clinician matches.
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> Result<RpcResponse<ClinicianWithAppointments>, AppError> {
    let id: String = query_input(query)?.decode()?;
    let clinician = ClinicianService::new(state.store()).get_by_id(&id).await?;
    Ok(RpcResponse::new(clinician))
}
