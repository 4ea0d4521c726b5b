//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. CORS (single configured origin, credentials allowed)
//! 3. `TraceLayer` (request span with method, uri, status, latency)
//! 4. Request ID (propagate or generate `x-request-id`)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
