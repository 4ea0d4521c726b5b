//! `client.*` handlers.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

use super::{RpcQuery, RpcResponse, json_body, query_input};
use crate::error::AppError;
use crate::models::{Client, ClientWithAppointments};
use crate::services::ClientService;
use crate::state::AppState;
use crate::store::Store;
use crate::validation::CreateClientInput;

/// POST /trpc/client.create
///
/// # Errors
///
/// Returns `AppError` if the input is invalid or the insert fails.
pub async fn create<S: Store>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateClientInput>, JsonRejection>,
) -> Result<RpcResponse<Client>, AppError> {
    let input = json_body(body)?;
    let client = ClientService::new(state.store()).create(input).await?;
    Ok(RpcResponse::new(client))
}

/// GET /trpc/client.list
///
/// # Errors
///
/// Returns `AppError` if the query fails.
pub async fn list<S: Store>(
    State(state): State<AppState<S>>,
) -> Result<RpcResponse<Vec<Client>>, AppError> {
    let clients = ClientService::new(state.store()).list().await?;
    Ok(RpcResponse::new(clients))
}

/// GET /trpc/client.getById?input="<id>"
///
/// # Errors
///
/// Returns `AppError` if the input is missing or no client matches.
pub async fn get_by_id<S: Store>(
    State(state): State<AppState<S>>,
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> Result<RpcResponse<ClientWithAppointments>, AppError> {
    let id: String = query_input(query)?.decode()?;
    let client = ClientService::new(state.store()).get_by_id(&id).await?;
    Ok(RpcResponse::new(client))
}
