//! # Structured Logging Module
//!
//! Environment-aware structured logging for tracing intent pipelines and
//! their emitted outcomes across async boundaries.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // Production gets machine-readable JSON records, everything else a
        // human-readable console layer.
        let result = if environment == "production" {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_filter(filter),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_ansi(true)
                        .with_filter(filter),
                )
                .try_init()
        };

        // A global subscriber may already be set by the embedding application.
        if result.is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("DASHBOARD_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "production" | "staging" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Log structured data for intent pipeline operations
pub fn log_intent_operation(
    intent_kind: &str,
    pipeline_id: Uuid,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        intent_kind = %intent_kind,
        pipeline_id = %pipeline_id,
        status = %status,
        details = details,
        "INTENT_OPERATION"
    );
}

/// Log a remote-operation failure with full context
pub fn log_remote_failure(intent_kind: &str, pipeline_id: Uuid, status: Option<u16>, error: &str) {
    tracing::error!(
        intent_kind = %intent_kind,
        pipeline_id = %pipeline_id,
        status = status,
        error = %error,
        "REMOTE_FAILURE"
    );
}
