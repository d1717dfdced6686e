//! # Status Report Types
//!
//! The data shapes exchanged between probes and the aggregator, and
//! between the aggregator and its callers. Wire field names are fixed;
//! external tooling matches on them.

use serde::{Deserialize, Serialize};

/// A status answer self-reported by one component.
///
/// `code` uses the conventional HTTP range (100-599). The aggregator
/// bands codes into healthy / degraded / unexpected; it never decides
/// health on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStatus {
    pub code: u16,
}

impl ProbeStatus {
    pub fn new(code: u16) -> Self {
        Self { code }
    }
}

/// Normalized per-component report returned to callers.
///
/// Invariant: every queried name present in the relevant registry map
/// yields exactly one report; names absent from the registry yield none
/// (they are logged instead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub plugin_name: String,
    /// Empty string means no error.
    pub error_message: String,
    pub status_code: u16,
}

impl Report {
    /// A report for a healthy or self-describing component.
    pub fn with_code(plugin_name: impl Into<String>, status_code: u16) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            error_message: String::new(),
            status_code,
        }
    }

    /// A report carrying an error message alongside its code.
    pub fn with_error(
        plugin_name: impl Into<String>,
        status_code: u16,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            error_message: error_message.into(),
            status_code,
        }
    }
}

/// One per-pipeline record as produced by the jobs subsystem.
///
/// Counts are signed because drivers that cannot compute them report -1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineState {
    pub pipeline: String,
    pub priority: u64,
    pub ready: bool,
    pub queue: String,
    pub active: i64,
    pub delayed: i64,
    pub reserved: i64,
    pub driver: String,
    pub error_message: String,
}

/// Normalized jobs report returned to callers, one per pipeline.
///
/// A 1:1 translation of [`PipelineState`]; ordering is whatever the
/// producer returned and the per-record `error_message` passes through
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsReport {
    pub pipeline: String,
    pub priority: u64,
    pub ready: bool,
    pub queue: String,
    pub active: i64,
    pub delayed: i64,
    pub reserved: i64,
    pub driver: String,
    pub error_message: String,
}

impl From<PipelineState> for JobsReport {
    fn from(state: PipelineState) -> Self {
        Self {
            pipeline: state.pipeline,
            priority: state.priority,
            ready: state.ready,
            queue: state.queue,
            active: state.active,
            delayed: state.delayed,
            reserved: state.reserved,
            driver: state.driver,
            error_message: state.error_message,
        }
    }
}
