//! # Route Definitions
//!
//! The status HTTP surface is three read-only, idempotent endpoints with
//! fixed paths.

use axum::routing::get;
use axum::Router;

use crate::web::handlers;
use crate::web::state::AppState;

/// Create the status routes:
/// - `/health` - per-component health reports
/// - `/ready` - per-component readiness reports
/// - `/jobs` - job-queue pipeline state
pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .route("/jobs", get(handlers::jobs::jobs))
}
