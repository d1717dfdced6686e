//! # Shutdown Gate
//!
//! A process-wide flag that short-circuits every status query once
//! graceful termination begins. The gate is owned by the server lifecycle
//! and cloned into handler state at construction; it is never a bare
//! process global.
//!
//! Contract: while the flag is false, normal processing proceeds. The
//! instant it is set, every endpoint returns a fixed "service is shutting
//! down" answer without touching the registry. The transition does not
//! wait for in-flight requests; drain semantics belong to the HTTP server
//! hosting the routes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

/// Cloneable handle over the single shutdown flag.
///
/// One writer (the termination path), many readers (request handlers).
/// Reads are lock-free atomic loads; there is no other synchronization
/// between writer and readers, and none is needed for a standalone flag.
#[derive(Debug, Clone, Default)]
pub struct ShutdownGate {
    initiated: Arc<AtomicBool>,
}

impl ShutdownGate {
    /// Create a gate in the "not shutting down" state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark shutdown as initiated. The false->true transition happens at
    /// most once per process; repeat calls are no-ops.
    pub fn initiate(&self) {
        if !self.initiated.swap(true, Ordering::Relaxed) {
            info!("shutdown initiated, status endpoints now short-circuit");
        }
    }

    /// Whether shutdown has been initiated.
    pub fn is_initiated(&self) -> bool {
        self.initiated.load(Ordering::Relaxed)
    }
}
