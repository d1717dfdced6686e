//! # Status Request Handlers
//!
//! HTTP handlers for the three status endpoints. Every handler consults
//! the shutdown gate before touching the registry; once the gate is set,
//! the fixed "service is shutting down" answer goes out with HTTP 200
//! regardless of the path queried.

pub mod health;
pub mod jobs;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// The fixed answer every endpoint returns once shutdown has begun.
///
/// The code is 200 on this path, not 503; existing probes depend on it.
pub(crate) fn shutting_down_response() -> Response {
    (StatusCode::OK, "service is shutting down").into_response()
}
