//! Jobs-state handler.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use super::shutting_down_response;
use crate::web::state::AppState;

/// Jobs query: GET /jobs
///
/// No selector; always queries the single jobs-state producer. Missing
/// producer and failed producer both answer with the fixed plain-text
/// error at the configured unavailable code.
pub async fn jobs(State(state): State<AppState>) -> Response {
    if state.shutdown.is_initiated() {
        return shutting_down_response();
    }

    match state.service.jobs_state().await {
        Ok(reports) => (StatusCode::OK, Json(reports)).into_response(),
        Err(e) => {
            let code = StatusCode::from_u16(state.service.unavailable_status_code())
                .unwrap_or(StatusCode::SERVICE_UNAVAILABLE);
            (code, e.to_string()).into_response()
        }
    }
}
