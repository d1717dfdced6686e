//! RPC service implementation.
//!
//! Two methods mirror the HTTP health/ready surface for one named
//! component each, returning the raw self-reported code rather than the
//! banded report. Unknown names yield an error-carrying result instead
//! of a code.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{VitalsError, VitalsResult};
use crate::services::status::StatusService;
use crate::shutdown::ShutdownGate;

/// Request naming the component to query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub plugin: String,
}

/// Response carrying the raw status code.
///
/// `code` stays 0 when the probe answered with no status; `message` is
/// empty on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub code: i64,
    pub message: String,
}

/// RPC service over the status aggregation layer.
///
/// Thin adapter delegating to [`StatusService`]; holds its own clone of
/// the shutdown gate so no component is queried once shutdown begins.
#[derive(Debug, Clone)]
pub struct StatusRpc {
    service: StatusService,
    shutdown: ShutdownGate,
}

impl StatusRpc {
    pub fn new(service: StatusService, shutdown: ShutdownGate) -> Self {
        Self { service, shutdown }
    }

    /// Current status of the named component.
    pub async fn status(&self, request: &RpcRequest) -> VitalsResult<RpcResponse> {
        debug!(plugin = %request.plugin, "Status method was invoked");

        if self.shutdown.is_initiated() {
            return Err(VitalsError::ShuttingDown);
        }

        let status = self.service.component_status(&request.plugin).await?;

        let mut response = RpcResponse::default();
        if let Some(status) = status {
            response.code = i64::from(status.code);
            debug!(code = status.code, "status code");
        }

        Ok(response)
    }

    /// Readiness of the named component.
    pub async fn ready(&self, request: &RpcRequest) -> VitalsResult<RpcResponse> {
        debug!(plugin = %request.plugin, "Ready method was invoked");

        if self.shutdown.is_initiated() {
            return Err(VitalsError::ShuttingDown);
        }

        let status = self.service.component_readiness(&request.plugin).await?;

        let mut response = RpcResponse::default();
        if let Some(status) = status {
            response.code = i64::from(status.code);
            debug!(code = status.code, "status code");
        }

        Ok(response)
    }
}
