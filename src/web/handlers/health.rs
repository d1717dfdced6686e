//! Health and readiness check handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::debug;

use super::shutting_down_response;
use crate::services::status::StatusAggregate;
use crate::web::extractors::PluginSelector;
use crate::web::state::AppState;

/// Health query: GET /health[?plugin=NAME]*
///
/// No selector queries every registered component. The response line is
/// 200 unless some component landed in the degraded band, in which case
/// it is the configured unavailable code - the body lists every report
/// either way.
pub async fn health(State(state): State<AppState>, selector: PluginSelector) -> Response {
    if state.shutdown.is_initiated() {
        return shutting_down_response();
    }

    if selector.plugins().is_empty() {
        debug!("no plugins provided, checking all plugins");
    }

    let aggregate = state.service.health(selector.plugins()).await;
    report_response(aggregate)
}

/// Readiness query: GET /ready[?plugin=NAME]*
///
/// Identical shape and algorithm to [`health`], against the readiness
/// capability map.
pub async fn ready(State(state): State<AppState>, selector: PluginSelector) -> Response {
    if state.shutdown.is_initiated() {
        return shutting_down_response();
    }

    let aggregate = state.service.readiness(selector.plugins()).await;
    report_response(aggregate)
}

fn report_response(aggregate: StatusAggregate) -> Response {
    let code = StatusCode::from_u16(aggregate.overall_code)
        .unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
    (code, Json(aggregate.reports)).into_response()
}
