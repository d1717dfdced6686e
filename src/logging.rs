//! # Tracing Setup
//!
//! Environment-aware console logging using the tracing ecosystem.
//! Designed for containerized applications where logs should go to
//! stdout/stderr. The host process may install its own subscriber first;
//! initialization here is set-once and tolerant of that.

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console-only tracing output.
///
/// Log level resolution: `RUST_LOG` wins if set, otherwise a default is
/// derived from `VITALS_ENV` (production => info, test => warn,
/// everything else => debug).
pub fn init_console_only() {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let use_ansi = IsTerminal::is_terminal(&std::io::stdout());

        let console_layer = fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_ansi(use_ansi)
            .with_filter(EnvFilter::new(&log_level));

        let subscriber = tracing_subscriber::registry().with(console_layer);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "global tracing subscriber already initialized - continuing with existing subscriber"
            );
        } else {
            tracing::debug!(
                environment = %environment,
                ansi_colors = use_ansi,
                "console logging initialized"
            );
        }
    });
}

fn get_environment() -> String {
    std::env::var("VITALS_ENV").unwrap_or_else(|_| "development".to_string())
}

fn get_log_level(environment: &str) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match environment {
            "production" => "info",
            "test" => "warn",
            _ => "debug",
        }
        .to_string()
    })
}
