//! # Web Module
//!
//! Axum-based HTTP surface for the status aggregation layer.
//!
//! ## Core Components
//!
//! - [`routes`] - HTTP route definitions
//! - [`handlers`] - request handlers for health, readiness, and jobs
//! - [`state`] - shared application state
//! - [`extractors`] - repeated `?plugin=` selector extraction

pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::Router;
use tracing::{error, info};

use crate::error::{VitalsError, VitalsResult};
pub use state::AppState;

/// Create the status application with all routes and middleware.
///
/// The request timeout comes from `check_timeout`; it is the only bound
/// on a hanging probe, since the aggregation core imposes none itself.
pub fn create_app(app_state: AppState) -> Router {
    let check_timeout = Duration::from_secs(app_state.config.check_timeout);

    Router::new()
        .merge(routes::status_routes())
        .layer(tower_http::timeout::TimeoutLayer::new(check_timeout))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Bind the configured address and serve the status endpoints.
///
/// On SIGINT/SIGTERM the shutdown gate is flipped first, then the server
/// stops accepting and drains; in-flight and late requests observe the
/// gate and short-circuit.
pub async fn serve(app_state: AppState) -> VitalsResult<()> {
    let address = app_state.config.address.clone();
    let gate = app_state.shutdown.clone();
    let app = create_app(app_state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| VitalsError::Server(format!("failed to bind to {address}: {e}")))?;

    info!("status server listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            gate.initiate();
        })
        .await
        .map_err(|e| VitalsError::Server(e.to_string()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!(%error, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                error!(%error, "failed to install SIGTERM handler");
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
}
