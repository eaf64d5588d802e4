//! ReadOutcome - The observable result of a read
//!
//! Per CONSISTENCY.md §4:
//! - `NotFound` and `ConsistencyNotYetAvailable` are reported outcomes,
//!   never faults; callers branch on outcome kind
//! - The two are distinct: a miss says the identity does not exist here,
//!   a consistency rejection says the demanded version does not exist YET

use crate::session::{PartitionVersion, SessionToken};
use crate::store::Item;

/// The kind of a read outcome, for branching and reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Found,
    NotFound,
    ConsistencyNotYetAvailable,
}

impl OutcomeKind {
    /// Returns the string representation used in logs and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Found => "FOUND",
            OutcomeKind::NotFound => "NOT_FOUND",
            OutcomeKind::ConsistencyNotYetAvailable => "CONSISTENCY_NOT_YET_AVAILABLE",
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The observable result of a read request.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadOutcome {
    /// The item was found. The token reflects the ledger snapshot the read
    /// was served against, so recording it keeps a session monotonic.
    Found {
        item: Item,
        session_token: SessionToken,
    },
    /// The identity does not exist here: unknown partition, unknown id, or
    /// a stored type tag different from the expected one.
    NotFound,
    /// The supplied token demands a version the partition has not reached.
    ConsistencyNotYetAvailable {
        required: PartitionVersion,
        available: PartitionVersion,
    },
}

impl ReadOutcome {
    /// Returns the outcome kind.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            ReadOutcome::Found { .. } => OutcomeKind::Found,
            ReadOutcome::NotFound => OutcomeKind::NotFound,
            ReadOutcome::ConsistencyNotYetAvailable { .. } => {
                OutcomeKind::ConsistencyNotYetAvailable
            }
        }
    }

    /// Returns true if the item was found.
    pub fn is_found(&self) -> bool {
        matches!(self, ReadOutcome::Found { .. })
    }

    /// Returns the found item, if any.
    pub fn item(&self) -> Option<&Item> {
        match self {
            ReadOutcome::Found { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Returns the refreshed session token, if the read succeeded.
    pub fn session_token(&self) -> Option<&SessionToken> {
        match self {
            ReadOutcome::Found { session_token, .. } => Some(session_token),
            _ => None,
        }
    }
}
