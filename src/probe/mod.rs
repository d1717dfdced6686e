//! # Probe Capabilities
//!
//! A component of the host process may implement zero or more of three
//! capabilities: status, readiness, and jobs state. Each capability is a
//! separate trait so registration can sort one component into whichever
//! registry maps its capabilities satisfy - static conformance, no
//! runtime type assertions.
//!
//! Probe return conventions:
//! - `Err(_)`: the probe's own check logic failed (distinct from the
//!   component reporting an unhealthy code)
//! - `Ok(None)`: the probe produced no status (malformed answer)
//! - `Ok(Some(status))`: the component's self-reported status code

pub mod registry;
pub mod types;

use async_trait::async_trait;

pub use registry::{ComponentHandles, Lookup, ProbeRegistry, RegistryBuilder};
pub use types::{JobsReport, PipelineState, ProbeStatus, Report};

/// Latest self-reported status of a component.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn status(&self) -> anyhow::Result<Option<ProbeStatus>>;
}

/// Whether a component is currently accepting work.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn ready(&self) -> anyhow::Result<Option<ProbeStatus>>;
}

/// State of the job-queue subsystem, one record per pipeline.
///
/// At most one jobs probe exists process-wide. Ordering of the returned
/// records is the producer's to choose; the aggregator does not re-sort.
#[async_trait]
pub trait JobsProbe: Send + Sync {
    async fn jobs_state(&self) -> anyhow::Result<Vec<PipelineState>>;
}
