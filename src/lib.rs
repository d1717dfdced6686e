#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Vitals
//!
//! Health, readiness, and job-queue status aggregation for long-running
//! services. Embedded in a host process, it answers three questions on
//! demand: "is component X alive/healthy?", "is component X ready to
//! accept work?", and "what is the current state of the job-queue
//! subsystem?".
//!
//! ## Architecture
//!
//! Components implement any subset of three capability traits
//! ([`HealthProbe`], [`ReadinessProbe`], [`JobsProbe`]). A one-time
//! startup collection step sorts each discovered component into the
//! capability maps it satisfies; the frozen registry is then queried by
//! an aggregation engine that translates every raw answer into a
//! normalized report and folds the results into one response code. A
//! process-wide shutdown gate short-circuits every query path during
//! graceful termination.
//!
//! ## Module Organization
//!
//! - [`probe`] - capability traits, report types, and the registry
//! - [`services`] - the transport-agnostic aggregation engine
//! - [`web`] - Axum HTTP surface (`/health`, `/ready`, `/jobs`)
//! - [`rpc`] - single-component polling for machine-to-machine callers
//! - [`shutdown`] - the shutdown gate handle
//! - [`config`] - configuration loading and defaults
//! - [`error`] - structured error handling
//! - [`logging`] - console tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use vitals::{
//!     ComponentHandles, HealthProbe, ProbeStatus, RegistryBuilder, ShutdownGate,
//!     StatusService, VitalsConfig,
//! };
//!
//! struct HttpServer;
//!
//! #[async_trait]
//! impl HealthProbe for HttpServer {
//!     async fn status(&self) -> anyhow::Result<Option<ProbeStatus>> {
//!         Ok(Some(ProbeStatus::new(200)))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> vitals::VitalsResult<()> {
//!     vitals::logging::init_console_only();
//!
//!     let registry = RegistryBuilder::new()
//!         .register(ComponentHandles::new("http").with_status(Arc::new(HttpServer)))
//!         .build();
//!
//!     let config = Arc::new(VitalsConfig::load_from_env()?);
//!     let service = StatusService::new(Arc::new(registry), config.unavailable_status_code);
//!     let state = vitals::web::AppState::new(service, ShutdownGate::new(), config);
//!
//!     vitals::web::serve(state).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod probe;
pub mod rpc;
pub mod services;
pub mod shutdown;
pub mod web;

pub use config::VitalsConfig;
pub use error::{VitalsError, VitalsResult};
pub use probe::registry::{ComponentHandles, Lookup, ProbeRegistry, RegistryBuilder};
pub use probe::types::{JobsReport, PipelineState, ProbeStatus, Report};
pub use probe::{HealthProbe, JobsProbe, ReadinessProbe};
pub use rpc::{RpcRequest, RpcResponse, StatusRpc};
pub use services::status::StatusService;
pub use shutdown::ShutdownGate;

/// Crate version, for host processes that report it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
