//! Observability subsystem
//!
//! Per OBSERVABILITY.md, this module provides:
//! - Structured logging (JSON, one line per event)
//! - Typed lifecycle events
//! - Deterministic counter-only metrics
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on execution
//! 2. No async, no background threads, no buffering
//! 3. Deterministic output for identical runs

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Logs a lifecycle event with no extra fields.
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Logs a lifecycle event with fields.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}
