//! # Status Service
//!
//! The aggregation engine behind every health, readiness, and jobs query.
//! Lives outside the HTTP layer so both the Axum handlers and the RPC
//! methods use the same logic.

mod service;

pub use service::{ProbeKind, StatusAggregate, StatusService};
