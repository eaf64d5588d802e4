//! Metrics registry
//!
//! Per OBSERVABILITY.md:
//! - Counters only, monotonic, reset only on process start
//! - Thread-safe with minimal locking: atomics with Relaxed ordering,
//!   exact totals once writers are quiescent

use std::sync::atomic::{AtomicU64, Ordering};

/// Operational counters for the simulator.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Items written
    writes: AtomicU64,
    /// Reads that found their item
    reads_found: AtomicU64,
    /// Reads that missed (identity or type)
    reads_not_found: AtomicU64,
    /// Reads rejected for demanding an unreached version
    consistency_rejections: AtomicU64,
    /// Requests rejected before reaching the store
    invalid_requests: AtomicU64,
    /// Client sessions opened
    sessions_opened: AtomicU64,
    /// Client sessions closed
    sessions_closed: AtomicU64,
}

/// A point-in-time copy of all counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub writes: u64,
    pub reads_found: u64,
    pub reads_not_found: u64,
    pub consistency_rejections: u64,
    pub invalid_requests: u64,
    pub sessions_opened: u64,
    pub sessions_closed: u64,
}

impl MetricsRegistry {
    /// Creates a registry with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful write.
    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a read that found its item.
    pub fn record_read_found(&self) {
        self.reads_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a read miss.
    pub fn record_read_not_found(&self) {
        self.reads_not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a consistency rejection.
    pub fn record_consistency_rejection(&self) {
        self.consistency_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a request rejected at the client boundary.
    pub fn record_invalid_request(&self) {
        self.invalid_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a session opened.
    pub fn record_session_opened(&self) {
        self.sessions_opened.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a session closed.
    pub fn record_session_closed(&self) {
        self.sessions_closed.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a point-in-time snapshot of every counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            writes: self.writes.load(Ordering::Relaxed),
            reads_found: self.reads_found.load(Ordering::Relaxed),
            reads_not_found: self.reads_not_found.load(Ordering::Relaxed),
            consistency_rejections: self.consistency_rejections.load(Ordering::Relaxed),
            invalid_requests: self.invalid_requests.load(Ordering::Relaxed),
            sessions_opened: self.sessions_opened.load(Ordering::Relaxed),
            sessions_closed: self.sessions_closed.load(Ordering::Relaxed),
        }
    }
}
