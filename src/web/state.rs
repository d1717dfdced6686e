//! # Web Application State
//!
//! Shared state for the status endpoints: the aggregation service, the
//! shutdown gate handle, and the configuration. Cloned into every
//! request handler by Axum.

use std::sync::Arc;

use crate::config::VitalsConfig;
use crate::services::status::StatusService;
use crate::shutdown::ShutdownGate;

/// Shared application state for the status HTTP surface.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: StatusService,
    /// Injected at construction; handlers read it before any registry
    /// access and never mutate it.
    pub shutdown: ShutdownGate,
    pub config: Arc<VitalsConfig>,
}

impl AppState {
    pub fn new(service: StatusService, shutdown: ShutdownGate, config: Arc<VitalsConfig>) -> Self {
        Self {
            service,
            shutdown,
            config,
        }
    }
}
