//! Router assembly, health checks and shutdown.

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode, header},
    middleware,
    routing::get,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{REQUEST_ID_HEADER, request_id_middleware};
use crate::routes;
use crate::state::AppState;
use crate::store::Store;

/// Build the full application router for the given state.
///
/// ```text
/// GET  /health        - Liveness
/// GET  /health/ready  - Readiness (store ping)
/// *    /trpc/...      - RPC procedures, see [`routes`]
/// ```
pub fn build_router<S: Store>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config().cors_origin.clone())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = tracing::field::Empty,
        )
    });

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness::<S>))
        .nest("/trpc", routes::routes())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace)
        .layer(cors)
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Health check body.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Liveness health check endpoint.
///
/// Returns ok if the server is running. Does not check dependencies.
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the store does not answer a ping.
async fn readiness<S: Store>(State(state): State<AppState<S>>) -> (StatusCode, Json<HealthStatus>) {
    match state.store().ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthStatus { status: "ok" })),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "unavailable",
                }),
            )
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
