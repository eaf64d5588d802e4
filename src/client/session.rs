//! ClientSession - One logical client connection
//!
//! Per CONSISTENCY.md §5:
//! - A session privately tracks the highest version it has observed per
//!   partition and attaches that token to its own reads, so a client
//!   always reads its own writes or later
//! - Session state is never shared between sessions; two clients see each
//!   other's writes only through the shared store
//! - Closing a session discards its state and leaves the store untouched
//!
//! The token override (`forge_session_token`) is a test hook for probing
//! the read path with tokens the session never legitimately observed.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use std::sync::Arc;

use crate::observability::{log_event_with_fields, Event, Logger, MetricsRegistry};
use crate::read_path::{ReadOutcome, ReadPathEngine, ReadRequest};
use crate::session::{PartitionVersion, SessionState, SessionToken};
use crate::store::{ItemPayload, PartitionedStore, StoreError, WriteResult};

use super::errors::{ClientError, ClientResult};

/// One logical client connection with private session state.
pub struct ClientSession {
    /// Unique session identifier.
    id: Uuid,
    /// When the session was opened.
    opened_at: DateTime<Utc>,
    /// Read path over the shared store and ledger.
    engine: ReadPathEngine,
    /// The shared store, for writes.
    store: Arc<PartitionedStore>,
    /// Shared operational counters.
    metrics: Arc<MetricsRegistry>,
    /// Private per-partition token bookkeeping.
    state: SessionState,
    /// Set once `close` has run; every later operation is rejected.
    closed: bool,
}

impl ClientSession {
    /// Opens a session. Called by [`Account::connect`](super::Account::connect).
    pub(crate) fn open(
        engine: ReadPathEngine,
        store: Arc<PartitionedStore>,
        metrics: Arc<MetricsRegistry>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            engine,
            store,
            metrics,
            state: SessionState::new(),
            closed: false,
        }
    }

    /// Returns the session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns when the session was opened.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Returns true once the session has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Writes an item and records the returned token, so later reads by
    /// this session observe this write or newer.
    pub fn write(
        &mut self,
        id: &str,
        partition_key: &str,
        payload: ItemPayload,
    ) -> ClientResult<WriteResult> {
        self.ensure_open()?;
        self.validate_key("id", id)?;
        self.validate_key("partition key", partition_key)?;

        let result = self
            .store
            .write(id, partition_key, payload)
            .map_err(|err| self.fail_corrupt(err))?;

        self.state.record_token(&result.session_token);
        self.metrics.record_write();
        Ok(result)
    }

    /// Reads by exact identity and expected type, attaching this session's
    /// current token for the partition (if any) as the freshness floor.
    ///
    /// `NotFound` and `ConsistencyNotYetAvailable` are outcomes, not
    /// errors; branch on [`ReadOutcome::kind`].
    pub fn read(
        &mut self,
        id: &str,
        partition_key: &str,
        expected_type: &str,
    ) -> ClientResult<ReadOutcome> {
        self.ensure_open()?;
        self.validate_key("id", id)?;
        self.validate_key("partition key", partition_key)?;

        let mut request = ReadRequest::new(id, partition_key, expected_type);
        if let Some(token) = self.state.current_token_for(partition_key) {
            request = request.with_session_token(token);
        }

        let outcome = self
            .engine
            .execute(&request)
            .map_err(|err| self.fail_corrupt(err))?;

        match &outcome {
            ReadOutcome::Found { session_token, .. } => {
                self.state.record_token(session_token);
                self.metrics.record_read_found();
            }
            ReadOutcome::NotFound => self.metrics.record_read_not_found(),
            ReadOutcome::ConsistencyNotYetAvailable { .. } => {
                self.metrics.record_consistency_rejection()
            }
        }

        Ok(outcome)
    }

    /// Closes the session and discards its session state. Idempotent.
    /// Store contents are unaffected.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.state.clear();
        self.metrics.record_session_closed();
        log_event_with_fields(
            Event::SessionClosed,
            &[("session_id", &self.id.to_string())],
        );
    }

    /// Test hook: force the session's token for `partition_key` to an
    /// arbitrary version, bypassing the monotonic merge.
    pub fn forge_session_token(
        &mut self,
        partition_key: &str,
        observed_version: u64,
    ) -> ClientResult<()> {
        self.ensure_open()?;
        self.validate_key("partition key", partition_key)?;
        self.state
            .replace_token(partition_key, PartitionVersion::new(observed_version));
        Ok(())
    }

    /// Adopts a token handed over by another session. Merged monotonically,
    /// exactly as if this session had observed the token itself.
    pub fn adopt_session_token(&mut self, token: &SessionToken) -> ClientResult<()> {
        self.ensure_open()?;
        self.state.record_token(token);
        Ok(())
    }

    /// Returns the token this session would attach to its next operation
    /// against `partition_key`, or `None` if it has never touched it.
    pub fn session_token_for(&self, partition_key: &str) -> Option<SessionToken> {
        self.state.current_token_for(partition_key)
    }

    fn ensure_open(&self) -> ClientResult<()> {
        if self.closed {
            return Err(ClientError::SessionClosed {
                session_id: self.id,
            });
        }
        Ok(())
    }

    fn validate_key(&self, field: &str, value: &str) -> ClientResult<()> {
        if value.is_empty() {
            self.metrics.record_invalid_request();
            return Err(ClientError::invalid_request(format!(
                "{} must not be empty",
                field
            )));
        }
        Ok(())
    }

    /// Logs corruption at FATAL and converts it to the client error.
    fn fail_corrupt(&self, err: StoreError) -> ClientError {
        match &err {
            StoreError::Ledger(ledger_err) => log_event_with_fields(
                Event::LedgerCorruption,
                &[
                    ("code", ledger_err.code()),
                    ("detail", &ledger_err.to_string()),
                ],
            ),
            StoreError::Poisoned { partition_key } => Logger::fatal(
                err.code(),
                &[("partition_key", partition_key.as_str())],
            ),
        }
        ClientError::from(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Account;
    use crate::read_path::OutcomeKind;
    use serde_json::json;

    fn payload() -> ItemPayload {
        ItemPayload::new("document", json!({ "name": "n" }))
    }

    #[test]
    fn test_write_records_token() {
        let account = Account::new();
        let mut client = account.connect();

        assert!(client.session_token_for("p").is_none());
        client.write("a", "p", payload()).unwrap();

        let token = client.session_token_for("p").unwrap();
        assert_eq!(token.observed_version(), PartitionVersion::new(1));
    }

    #[test]
    fn test_read_own_write() {
        let account = Account::new();
        let mut client = account.connect();
        client.write("a", "p", payload()).unwrap();

        let outcome = client.read("a", "p", "document").unwrap();
        assert!(outcome.is_found());
        assert_eq!(outcome.item().unwrap().id(), "a");
    }

    #[test]
    fn test_successful_read_advances_session() {
        let account = Account::new();
        let mut writer = account.connect();
        let mut reader = account.connect();

        writer.write("a", "p", payload()).unwrap();
        writer.write("b", "p", payload()).unwrap();

        reader.read("a", "p", "document").unwrap();
        assert_eq!(
            reader.session_token_for("p").unwrap().observed_version(),
            PartitionVersion::new(2)
        );
    }

    #[test]
    fn test_empty_id_is_invalid_request() {
        let account = Account::new();
        let mut client = account.connect();

        let err = client.read("", "p", "document").unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest { .. }));
        assert_eq!(account.metrics_snapshot().invalid_requests, 1);
    }

    #[test]
    fn test_empty_partition_key_is_invalid_request() {
        let account = Account::new();
        let mut client = account.connect();

        let err = client.write("a", "", payload()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest { .. }));
    }

    #[test]
    fn test_operations_after_close_are_rejected() {
        let account = Account::new();
        let mut client = account.connect();
        client.write("a", "p", payload()).unwrap();

        client.close();
        assert!(client.is_closed());

        let err = client.read("a", "p", "document").unwrap_err();
        assert!(matches!(err, ClientError::SessionClosed { .. }));
        let err = client.write("b", "p", payload()).unwrap_err();
        assert!(matches!(err, ClientError::SessionClosed { .. }));
    }

    #[test]
    fn test_close_is_idempotent() {
        let account = Account::new();
        let mut client = account.connect();
        client.close();
        client.close();
        assert_eq!(account.metrics_snapshot().sessions_closed, 1);
    }

    #[test]
    fn test_close_discards_session_state_not_store() {
        let account = Account::new();
        let mut client = account.connect();
        client.write("a", "p", payload()).unwrap();
        client.close();

        assert!(account.store().contains_partition("p"));

        let mut reopened = account.connect();
        assert!(reopened.session_token_for("p").is_none());
        assert!(reopened.read("a", "p", "document").unwrap().is_found());
    }

    #[test]
    fn test_forged_token_drives_consistency_rejection() {
        let account = Account::new();
        let mut client = account.connect();
        client.write("a", "p", payload()).unwrap();

        client.forge_session_token("p", 5).unwrap();
        let outcome = client.read("a", "p", "document").unwrap();
        assert_eq!(outcome.kind(), OutcomeKind::ConsistencyNotYetAvailable);
        assert_eq!(account.metrics_snapshot().consistency_rejections, 1);
    }

    #[test]
    fn test_adopted_token_merges_monotonically() {
        let account = Account::new();
        let mut writer = account.connect();
        let mut reader = account.connect();

        writer.write("a", "p", payload()).unwrap();
        let result = writer.write("b", "p", payload()).unwrap();

        reader
            .adopt_session_token(&result.session_token)
            .unwrap();
        assert_eq!(
            reader.session_token_for("p").unwrap().observed_version(),
            PartitionVersion::new(2)
        );

        // An older token does not move the session backwards.
        reader
            .adopt_session_token(&SessionToken::new("p", PartitionVersion::new(1)))
            .unwrap();
        assert_eq!(
            reader.session_token_for("p").unwrap().observed_version(),
            PartitionVersion::new(2)
        );
    }
}
