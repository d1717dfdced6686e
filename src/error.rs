//! Error types for the vitals crate.

use thiserror::Error;

/// Errors produced by the status aggregation layer itself.
///
/// Failures inside a probe are a different animal: they cross the plugin
/// boundary as [`anyhow::Error`] and are folded into a single [`Report`]
/// entry without aborting sibling queries.
///
/// [`Report`]: crate::probe::types::Report
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VitalsError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("no such plugin: {name}")]
    ProbeNotFound { name: String },
    #[error("probe invocation failed: {0}")]
    ProbeFailed(String),
    #[error("jobs plugin not found")]
    JobsProbeNotFound,
    #[error("service is shutting down")]
    ShuttingDown,
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("server error: {0}")]
    Server(String),
}

impl From<serde_json::Error> for VitalsError {
    fn from(error: serde_json::Error) -> Self {
        VitalsError::Serialization(error.to_string())
    }
}

impl From<anyhow::Error> for VitalsError {
    fn from(error: anyhow::Error) -> Self {
        VitalsError::ProbeFailed(error.to_string())
    }
}

pub type VitalsResult<T> = Result<T, VitalsError>;
