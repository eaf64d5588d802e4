//! SessionState - Per-client session token bookkeeping
//!
//! Per CONSISTENCY.md §5:
//! - Each client session owns a private map of partition key to the highest
//!   version it has observed there
//! - Tokens merge by `max`: observing an older token never lowers the
//!   requirement a session will attach to its next read
//! - Session state is never shared between independently connected clients;
//!   cross-client visibility happens only through the shared store
//!
//! The explicit override (`replace_token`) exists to model forged or
//! manually advanced tokens. It bypasses the `max` merge on purpose.

use std::collections::HashMap;

use super::{PartitionVersion, SessionToken};

/// A client session's private view of the partitions it has observed.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Highest observed version per partition key.
    observed: HashMap<String, PartitionVersion>,
}

impl SessionState {
    /// Creates empty session state: no partition carries a freshness
    /// requirement yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a token into the session: the stored version for the token's
    /// partition becomes `max(existing, token.observed_version)`.
    pub fn record_token(&mut self, token: &SessionToken) {
        let entry = self
            .observed
            .entry(token.partition_key().to_string())
            .or_insert(PartitionVersion::ZERO);
        if token.observed_version() > *entry {
            *entry = token.observed_version();
        }
    }

    /// Returns the token to attach to the next read or write against
    /// `partition_key`, or `None` if this session has never touched it.
    pub fn current_token_for(&self, partition_key: &str) -> Option<SessionToken> {
        self.observed
            .get(partition_key)
            .map(|version| SessionToken::new(partition_key, *version))
    }

    /// Forces the stored version for `partition_key`, bypassing the `max`
    /// merge. Models forged or manually incremented tokens.
    pub fn replace_token(&mut self, partition_key: &str, observed_version: PartitionVersion) {
        self.observed
            .insert(partition_key.to_string(), observed_version);
    }

    /// Discards all observed tokens.
    pub fn clear(&mut self) {
        self.observed.clear();
    }

    /// Returns true if this session carries no freshness requirements.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Number of partitions this session has observed.
    pub fn partition_count(&self) -> usize {
        self.observed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_partition_has_no_token() {
        let state = SessionState::new();
        assert!(state.current_token_for("p").is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn test_record_token_then_current() {
        let mut state = SessionState::new();
        state.record_token(&SessionToken::new("p", PartitionVersion::new(3)));

        let token = state.current_token_for("p").unwrap();
        assert_eq!(token.observed_version(), PartitionVersion::new(3));
        assert_eq!(token.partition_key(), "p");
    }

    #[test]
    fn test_record_merges_by_max() {
        let mut state = SessionState::new();
        state.record_token(&SessionToken::new("p", PartitionVersion::new(5)));
        state.record_token(&SessionToken::new("p", PartitionVersion::new(2)));

        // The older token never lowers the requirement.
        let token = state.current_token_for("p").unwrap();
        assert_eq!(token.observed_version(), PartitionVersion::new(5));

        state.record_token(&SessionToken::new("p", PartitionVersion::new(9)));
        let token = state.current_token_for("p").unwrap();
        assert_eq!(token.observed_version(), PartitionVersion::new(9));
    }

    #[test]
    fn test_partitions_tracked_independently() {
        let mut state = SessionState::new();
        state.record_token(&SessionToken::new("a", PartitionVersion::new(1)));
        state.record_token(&SessionToken::new("b", PartitionVersion::new(7)));

        assert_eq!(state.partition_count(), 2);
        assert_eq!(
            state.current_token_for("a").unwrap().observed_version(),
            PartitionVersion::new(1)
        );
        assert_eq!(
            state.current_token_for("b").unwrap().observed_version(),
            PartitionVersion::new(7)
        );
    }

    #[test]
    fn test_replace_bypasses_max_merge() {
        let mut state = SessionState::new();
        state.record_token(&SessionToken::new("p", PartitionVersion::new(8)));

        state.replace_token("p", PartitionVersion::new(2));
        assert_eq!(
            state.current_token_for("p").unwrap().observed_version(),
            PartitionVersion::new(2)
        );

        // Replace also plants tokens for untouched partitions.
        state.replace_token("forged", PartitionVersion::new(999));
        assert_eq!(
            state.current_token_for("forged").unwrap().observed_version(),
            PartitionVersion::new(999)
        );
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut state = SessionState::new();
        state.record_token(&SessionToken::new("a", PartitionVersion::new(1)));
        state.record_token(&SessionToken::new("b", PartitionVersion::new(2)));

        state.clear();
        assert!(state.is_empty());
        assert!(state.current_token_for("a").is_none());
    }
}
