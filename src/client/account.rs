//! Account - The shared target clients connect to
//!
//! Stands in for the account a real client library would be pointed at.
//! It owns the shared store, ledger, and metrics; it carries no
//! credentials and no endpoint (no network exists here).
//!
//! Per CONSISTENCY.md §5, everything clients share flows through this
//! handle. Session state never does.

use std::sync::Arc;

use crate::observability::{log_event_with_fields, Event, MetricsRegistry, MetricsSnapshot};
use crate::read_path::ReadPathEngine;
use crate::session::VersionLedger;
use crate::store::PartitionedStore;

use super::ClientSession;

/// The shared simulated account: store, ledger, and metrics.
///
/// Cloning the handle is cheap and every clone points at the same state.
/// Dropping the last handle is store teardown.
#[derive(Clone)]
pub struct Account {
    ledger: Arc<VersionLedger>,
    store: Arc<PartitionedStore>,
    metrics: Arc<MetricsRegistry>,
}

impl Account {
    /// Creates a fresh account with an empty store and ledger.
    pub fn new() -> Self {
        let ledger = Arc::new(VersionLedger::new());
        let store = Arc::new(PartitionedStore::new(Arc::clone(&ledger)));
        Self {
            ledger,
            store,
            metrics: Arc::new(MetricsRegistry::new()),
        }
    }

    /// Opens a new client session against this account.
    ///
    /// The session starts with empty session state: it has observed
    /// nothing and its first reads carry no freshness requirement.
    pub fn connect(&self) -> ClientSession {
        let engine = ReadPathEngine::new(Arc::clone(&self.store), Arc::clone(&self.ledger));
        let session = ClientSession::open(engine, Arc::clone(&self.store), Arc::clone(&self.metrics));
        self.metrics.record_session_opened();
        log_event_with_fields(
            Event::SessionOpened,
            &[("session_id", &session.id().to_string())],
        );
        session
    }

    /// The shared store, for direct inspection in tests and scenarios.
    pub fn store(&self) -> &Arc<PartitionedStore> {
        &self.store
    }

    /// A point-in-time copy of the account's operational counters.
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_opens_independent_sessions() {
        let account = Account::new();
        let first = account.connect();
        let second = account.connect();

        assert_ne!(first.id(), second.id());
        assert_eq!(account.metrics_snapshot().sessions_opened, 2);
    }

    #[test]
    fn test_clones_share_state() {
        let account = Account::new();
        let clone = account.clone();

        let mut client = account.connect();
        client
            .write("a", "p", crate::store::ItemPayload::new("document", serde_json::json!({})))
            .unwrap();

        assert!(clone.store().contains_partition("p"));
        assert_eq!(clone.metrics_snapshot().writes, 1);
    }
}
