//! Shared test infrastructure: mock probes and an in-process app harness.

// Each integration test binary compiles its own copy; not every binary
// uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use vitals::web::AppState;
use vitals::{
    ComponentHandles, HealthProbe, JobsProbe, PipelineState, ProbeStatus, ReadinessProbe,
    RegistryBuilder, ShutdownGate, StatusService, VitalsConfig,
};

/// Always answers with a fixed status code.
pub struct StaticProbe(pub u16);

#[async_trait]
impl HealthProbe for StaticProbe {
    async fn status(&self) -> anyhow::Result<Option<ProbeStatus>> {
        Ok(Some(ProbeStatus::new(self.0)))
    }
}

#[async_trait]
impl ReadinessProbe for StaticProbe {
    async fn ready(&self) -> anyhow::Result<Option<ProbeStatus>> {
        Ok(Some(ProbeStatus::new(self.0)))
    }
}

/// The probe's own check logic fails.
pub struct FailingProbe(pub &'static str);

#[async_trait]
impl HealthProbe for FailingProbe {
    async fn status(&self) -> anyhow::Result<Option<ProbeStatus>> {
        anyhow::bail!("{}", self.0)
    }
}

#[async_trait]
impl ReadinessProbe for FailingProbe {
    async fn ready(&self) -> anyhow::Result<Option<ProbeStatus>> {
        anyhow::bail!("{}", self.0)
    }
}

/// Answers with no status at all.
pub struct NilProbe;

#[async_trait]
impl HealthProbe for NilProbe {
    async fn status(&self) -> anyhow::Result<Option<ProbeStatus>> {
        Ok(None)
    }
}

#[async_trait]
impl ReadinessProbe for NilProbe {
    async fn ready(&self) -> anyhow::Result<Option<ProbeStatus>> {
        Ok(None)
    }
}

/// Panics when invoked; proves a code path never reached the probe.
pub struct PanickingProbe;

#[async_trait]
impl HealthProbe for PanickingProbe {
    async fn status(&self) -> anyhow::Result<Option<ProbeStatus>> {
        panic!("probe must not be invoked");
    }
}

#[async_trait]
impl ReadinessProbe for PanickingProbe {
    async fn ready(&self) -> anyhow::Result<Option<ProbeStatus>> {
        panic!("probe must not be invoked");
    }
}

#[async_trait]
impl JobsProbe for PanickingProbe {
    async fn jobs_state(&self) -> anyhow::Result<Vec<PipelineState>> {
        panic!("probe must not be invoked");
    }
}

/// Returns a fixed set of pipeline records.
pub struct StaticJobs(pub Vec<PipelineState>);

#[async_trait]
impl JobsProbe for StaticJobs {
    async fn jobs_state(&self) -> anyhow::Result<Vec<PipelineState>> {
        Ok(self.0.clone())
    }
}

/// Jobs producer whose query fails.
pub struct FailingJobs;

#[async_trait]
impl JobsProbe for FailingJobs {
    async fn jobs_state(&self) -> anyhow::Result<Vec<PipelineState>> {
        anyhow::bail!("driver connection lost")
    }
}

pub fn sample_pipelines() -> Vec<PipelineState> {
    vec![
        PipelineState {
            pipeline: "emails".to_string(),
            priority: 1,
            ready: true,
            queue: "emails-queue".to_string(),
            active: 12,
            delayed: 3,
            reserved: 1,
            driver: "memory".to_string(),
            error_message: String::new(),
        },
        PipelineState {
            pipeline: "exports".to_string(),
            priority: 10,
            ready: false,
            queue: "exports-queue".to_string(),
            active: -1,
            delayed: -1,
            reserved: -1,
            driver: "amqp".to_string(),
            error_message: "consumer offline".to_string(),
        },
    ]
}

/// Build an app plus the state it shares, for tests that need both.
pub fn harness(builder: RegistryBuilder, unavailable_status_code: u16) -> (Router, AppState) {
    let config = Arc::new(VitalsConfig {
        unavailable_status_code,
        ..VitalsConfig::default()
    });
    let service = StatusService::new(Arc::new(builder.build()), unavailable_status_code);
    let state = AppState::new(service, ShutdownGate::new(), config);
    (vitals::web::create_app(state.clone()), state)
}

/// Build an app with the default 503 unavailable code.
pub fn app(builder: RegistryBuilder) -> Router {
    harness(builder, 503).0
}

/// Drive one GET request through the router and decode the response.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8(body.to_vec()).expect("utf8 body"))
}

/// GET a JSON endpoint and parse the body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body).expect("json body");
    (status, json)
}

/// Convenience: a component with both health and readiness capabilities.
pub fn static_component(name: &str, code: u16) -> ComponentHandles {
    ComponentHandles::new(name)
        .with_status(Arc::new(StaticProbe(code)))
        .with_readiness(Arc::new(StaticProbe(code)))
}
