//! Aggregation engine for status and readiness queries.
//!
//! One parameterized engine serves both capability maps; the jobs query
//! has its own narrower path. Per-component answers are folded into
//! normalized [`Report`]s using a fixed code-banding policy, and one bad
//! component never aborts processing of its siblings.

use std::sync::Arc;

use tracing::{error, info};

use crate::error::{VitalsError, VitalsResult};
use crate::probe::registry::Lookup;
use crate::probe::types::{JobsReport, ProbeStatus, Report};
use crate::probe::{HealthProbe, ProbeRegistry, ReadinessProbe};

/// Which capability map a status/readiness query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    Health,
    Readiness,
}

/// A live capability handle, unified across the two map types so the
/// engine exists once.
enum ProbeHandle {
    Health(Arc<dyn HealthProbe>),
    Readiness(Arc<dyn ReadinessProbe>),
}

impl ProbeHandle {
    async fn invoke(&self) -> anyhow::Result<Option<ProbeStatus>> {
        match self {
            ProbeHandle::Health(probe) => probe.status().await,
            ProbeHandle::Readiness(probe) => probe.ready().await,
        }
    }
}

/// Outcome of one aggregate query.
///
/// `overall_code` is 200 unless some component pushed the response into
/// the degraded band, in which case it is the configured unavailable
/// code - while `reports` still lists every queried component. The
/// response line and the body can therefore disagree; external probes
/// depend on exactly this behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAggregate {
    pub reports: Vec<Report>,
    pub overall_code: u16,
}

/// Status aggregation service.
///
/// Fans a query out across some or all registered components, translates
/// each raw answer into a [`Report`], and decides the overall response
/// code. Shared by the HTTP handlers and the RPC methods.
#[derive(Clone)]
pub struct StatusService {
    registry: Arc<ProbeRegistry>,
    unavailable_status_code: u16,
}

impl std::fmt::Debug for StatusService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusService")
            .field("status_probes", &self.registry.status_len())
            .field("readiness_probes", &self.registry.readiness_len())
            .field("unavailable_status_code", &self.unavailable_status_code)
            .finish()
    }
}

impl StatusService {
    pub fn new(registry: Arc<ProbeRegistry>, unavailable_status_code: u16) -> Self {
        Self {
            registry,
            unavailable_status_code,
        }
    }

    pub fn unavailable_status_code(&self) -> u16 {
        self.unavailable_status_code
    }

    // =========================================================================
    // Endpoint-Level Methods
    // =========================================================================

    /// Health query. An empty selector means "all registered components".
    pub async fn health(&self, selector: &[String]) -> StatusAggregate {
        self.aggregate(ProbeKind::Health, selector).await
    }

    /// Readiness query. Same algorithm as [`StatusService::health`],
    /// against the readiness map.
    pub async fn readiness(&self, selector: &[String]) -> StatusAggregate {
        self.aggregate(ProbeKind::Readiness, selector).await
    }

    /// Jobs-state query against the single process-wide jobs probe.
    ///
    /// Both "no probe registered" and "probe failed" surface as the same
    /// fixed [`VitalsError::JobsProbeNotFound`]; the log line carries the
    /// distinction.
    pub async fn jobs_state(&self) -> VitalsResult<Vec<JobsReport>> {
        let Some(probe) = self.registry.jobs_probe() else {
            return Err(VitalsError::JobsProbeNotFound);
        };

        match probe.jobs_state().await {
            Ok(states) => Ok(states.into_iter().map(JobsReport::from).collect()),
            Err(e) => {
                error!(error = %e, "jobs state query failed");
                Err(VitalsError::JobsProbeNotFound)
            }
        }
    }

    /// Direct status of one named component, for the RPC surface.
    ///
    /// No code banding here: the raw self-reported status passes through,
    /// and unknown or uninitialized names become an error instead of a
    /// report entry.
    pub async fn component_status(&self, name: &str) -> VitalsResult<Option<ProbeStatus>> {
        match self.registry.status_lookup(name) {
            Lookup::Missing | Lookup::Uninitialized => Err(VitalsError::ProbeNotFound {
                name: name.to_string(),
            }),
            Lookup::Found(probe) => Ok(probe.status().await?),
        }
    }

    /// Direct readiness of one named component, for the RPC surface.
    pub async fn component_readiness(&self, name: &str) -> VitalsResult<Option<ProbeStatus>> {
        match self.registry.readiness_lookup(name) {
            Lookup::Missing | Lookup::Uninitialized => Err(VitalsError::ProbeNotFound {
                name: name.to_string(),
            }),
            Lookup::Found(probe) => Ok(probe.ready().await?),
        }
    }

    // =========================================================================
    // The Engine
    // =========================================================================

    async fn aggregate(&self, kind: ProbeKind, selector: &[String]) -> StatusAggregate {
        if selector.is_empty() {
            self.aggregate_all(kind).await
        } else {
            self.aggregate_named(kind, selector).await
        }
    }

    /// "Query all" mode: every map entry yields exactly one report,
    /// including entries with no live handle. No early termination.
    async fn aggregate_all(&self, kind: ProbeKind) -> StatusAggregate {
        let entries = self.entries(kind);
        let mut reports = Vec::with_capacity(entries.len());
        let mut degraded = false;

        for (name, handle) in entries {
            let Some(handle) = handle else {
                info!(plugin = %name, "plugin is nil or not initialized");
                reports.push(Report::with_error(
                    name,
                    404,
                    "plugin is nil or not initialized",
                ));
                continue;
            };

            let (report, flagged) = self.classify(&name, handle.invoke().await);
            degraded = degraded || flagged;
            reports.push(report);
        }

        self.finish(reports, degraded)
    }

    /// "Named subset" mode: requested names are queried in request order;
    /// unknown or uninitialized names are logged and skipped without a
    /// report entry. No short-circuit across names.
    async fn aggregate_named(&self, kind: ProbeKind, selector: &[String]) -> StatusAggregate {
        let mut reports = Vec::with_capacity(selector.len());
        let mut degraded = false;

        for name in selector {
            let handle = match self.lookup(kind, name) {
                HandleLookup::Missing | HandleLookup::Uninitialized => {
                    match kind {
                        ProbeKind::Health => {
                            info!(plugin = %name, "plugin does not support health checks");
                        }
                        ProbeKind::Readiness => {
                            info!(plugin = %name, "plugin does not support readiness checks");
                        }
                    }
                    continue;
                }
                HandleLookup::Found(handle) => handle,
            };

            let (report, flagged) = self.classify(name, handle.invoke().await);
            degraded = degraded || flagged;
            reports.push(report);
        }

        self.finish(reports, degraded)
    }

    /// Fold one raw probe answer into a report.
    ///
    /// Returns the report and whether it pushes the overall response line
    /// to the unavailable code. Raw 5xx detail never reaches the caller.
    fn classify(
        &self,
        name: &str,
        outcome: anyhow::Result<Option<ProbeStatus>>,
    ) -> (Report, bool) {
        let unavailable = self.unavailable_status_code;

        match outcome {
            Err(e) => (Report::with_error(name, unavailable, e.to_string()), true),
            Ok(None) => (
                Report::with_error(name, unavailable, "plugin is not available, returned nil"),
                false,
            ),
            Ok(Some(status)) if status.code >= 500 => (
                Report::with_error(name, unavailable, "internal server error, see logs"),
                true,
            ),
            Ok(Some(status)) if (100..=400).contains(&status.code) => {
                (Report::with_code(name, status.code), false)
            }
            Ok(Some(status)) => (
                Report::with_error(name, status.code, "unexpected status code"),
                false,
            ),
        }
    }

    fn finish(&self, reports: Vec<Report>, degraded: bool) -> StatusAggregate {
        StatusAggregate {
            reports,
            overall_code: if degraded {
                self.unavailable_status_code
            } else {
                200
            },
        }
    }

    fn entries(&self, kind: ProbeKind) -> Vec<(String, Option<ProbeHandle>)> {
        match kind {
            ProbeKind::Health => self
                .registry
                .status_entries()
                .map(|(name, probe)| {
                    (
                        name.to_string(),
                        probe.map(|p| ProbeHandle::Health(Arc::clone(p))),
                    )
                })
                .collect(),
            ProbeKind::Readiness => self
                .registry
                .readiness_entries()
                .map(|(name, probe)| {
                    (
                        name.to_string(),
                        probe.map(|p| ProbeHandle::Readiness(Arc::clone(p))),
                    )
                })
                .collect(),
        }
    }

    fn lookup(&self, kind: ProbeKind, name: &str) -> HandleLookup {
        match kind {
            ProbeKind::Health => match self.registry.status_lookup(name) {
                Lookup::Missing => HandleLookup::Missing,
                Lookup::Uninitialized => HandleLookup::Uninitialized,
                Lookup::Found(probe) => HandleLookup::Found(ProbeHandle::Health(probe)),
            },
            ProbeKind::Readiness => match self.registry.readiness_lookup(name) {
                Lookup::Missing => HandleLookup::Missing,
                Lookup::Uninitialized => HandleLookup::Uninitialized,
                Lookup::Found(probe) => HandleLookup::Found(ProbeHandle::Readiness(probe)),
            },
        }
    }
}

/// Kind-erased lookup result for the named-subset path.
enum HandleLookup {
    Missing,
    Uninitialized,
    Found(ProbeHandle),
}
