//! # Probe Registry
//!
//! Three independent name->capability mappings (status, readiness, jobs),
//! populated once at startup and read-only for the remaining process
//! life. Registration is last-write-wins per map; there is no removal.
//!
//! A map value of `None` is a distinct, reportable condition ("registered
//! but not initialized") from a name that is absent altogether; the
//! aggregator treats the two differently.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::{HealthProbe, JobsProbe, ReadinessProbe};

/// Result of a by-name capability lookup.
pub enum Lookup<P: ?Sized> {
    /// Name absent from the map.
    Missing,
    /// Name present but the stored handle is empty.
    Uninitialized,
    /// A live capability handle.
    Found(Arc<P>),
}

/// One discovered component and the capability handles it carries.
///
/// A component may satisfy any subset of the three capabilities; the
/// builder sorts it into every map its handles cover.
pub struct ComponentHandles {
    name: String,
    status: Option<Arc<dyn HealthProbe>>,
    readiness: Option<Arc<dyn ReadinessProbe>>,
    jobs: Option<Arc<dyn JobsProbe>>,
}

impl ComponentHandles {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
            readiness: None,
            jobs: None,
        }
    }

    pub fn with_status(mut self, probe: Arc<dyn HealthProbe>) -> Self {
        self.status = Some(probe);
        self
    }

    pub fn with_readiness(mut self, probe: Arc<dyn ReadinessProbe>) -> Self {
        self.readiness = Some(probe);
        self
    }

    pub fn with_jobs(mut self, probe: Arc<dyn JobsProbe>) -> Self {
        self.jobs = Some(probe);
        self
    }
}

/// Startup-time collection step for discovered components.
///
/// Build once, freeze with [`RegistryBuilder::build`], then share the
/// frozen registry behind an `Arc`. Because nothing mutates after
/// `build()`, concurrent reads need no locking.
#[derive(Default)]
pub struct RegistryBuilder {
    status: HashMap<String, Option<Arc<dyn HealthProbe>>>,
    readiness: HashMap<String, Option<Arc<dyn ReadinessProbe>>>,
    jobs: Option<Arc<dyn JobsProbe>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort a component into every capability map its handles satisfy.
    pub fn register(mut self, component: ComponentHandles) -> Self {
        let ComponentHandles {
            name,
            status,
            readiness,
            jobs,
        } = component;

        if let Some(probe) = status {
            info!(plugin = %name, "registered status probe");
            self.status.insert(name.clone(), Some(probe));
        }
        if let Some(probe) = readiness {
            info!(plugin = %name, "registered readiness probe");
            self.readiness.insert(name.clone(), Some(probe));
        }
        if let Some(probe) = jobs {
            info!(plugin = %name, "registered jobs probe");
            self.jobs = Some(probe);
        }
        self
    }

    /// Reserve a name in the status map without a live handle.
    ///
    /// Such entries surface as "plugin is nil or not initialized" in
    /// aggregate queries.
    pub fn reserve_status(mut self, name: impl Into<String>) -> Self {
        self.status.insert(name.into(), None);
        self
    }

    /// Reserve a name in the readiness map without a live handle.
    pub fn reserve_readiness(mut self, name: impl Into<String>) -> Self {
        self.readiness.insert(name.into(), None);
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> ProbeRegistry {
        ProbeRegistry {
            status: self.status,
            readiness: self.readiness,
            jobs: self.jobs,
        }
    }
}

/// Frozen capability maps, read-only after startup.
pub struct ProbeRegistry {
    status: HashMap<String, Option<Arc<dyn HealthProbe>>>,
    readiness: HashMap<String, Option<Arc<dyn ReadinessProbe>>>,
    jobs: Option<Arc<dyn JobsProbe>>,
}

impl ProbeRegistry {
    pub fn status_lookup(&self, name: &str) -> Lookup<dyn HealthProbe> {
        match self.status.get(name) {
            None => Lookup::Missing,
            Some(None) => Lookup::Uninitialized,
            Some(Some(probe)) => Lookup::Found(Arc::clone(probe)),
        }
    }

    pub fn readiness_lookup(&self, name: &str) -> Lookup<dyn ReadinessProbe> {
        match self.readiness.get(name) {
            None => Lookup::Missing,
            Some(None) => Lookup::Uninitialized,
            Some(Some(probe)) => Lookup::Found(Arc::clone(probe)),
        }
    }

    /// Every status entry; iteration order is unspecified.
    pub fn status_entries(
        &self,
    ) -> impl Iterator<Item = (&str, Option<&Arc<dyn HealthProbe>>)> {
        self.status.iter().map(|(name, probe)| (name.as_str(), probe.as_ref()))
    }

    /// Every readiness entry; iteration order is unspecified.
    pub fn readiness_entries(
        &self,
    ) -> impl Iterator<Item = (&str, Option<&Arc<dyn ReadinessProbe>>)> {
        self.readiness
            .iter()
            .map(|(name, probe)| (name.as_str(), probe.as_ref()))
    }

    pub fn status_len(&self) -> usize {
        self.status.len()
    }

    pub fn readiness_len(&self) -> usize {
        self.readiness.len()
    }

    /// The single process-wide jobs probe, if one registered.
    pub fn jobs_probe(&self) -> Option<Arc<dyn JobsProbe>> {
        self.jobs.as_ref().map(Arc::clone)
    }
}
