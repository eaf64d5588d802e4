//! SessionToken - Minimum-freshness assertion for reads
//!
//! Per CONSISTENCY.md §3:
//! - A session token is the pair (partition key, observed version)
//! - Produced by every write, reflecting the partition counter immediately
//!   after that write
//! - Produced by every successful read, reflecting the ledger snapshot the
//!   read was served against
//! - Consumed by reads to require "my own writes or later"
//!
//! This is a PURE TYPE with NO behavior beyond construction and access.
//! No opaque wire format exists; the `Display` rendering is for logs only
//! and is never parsed back.

use super::PartitionVersion;

/// An assertion that a partition has been observed at a given version.
///
/// Per CONSISTENCY.md §3, a token only ever constrains reads against the
/// partition it names. Tokens for different partitions are unrelated.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SessionToken {
    /// The partition this token speaks for.
    partition_key: String,
    /// The highest version the holder has observed in that partition.
    observed_version: PartitionVersion,
}

impl SessionToken {
    /// Creates a token asserting that `partition_key` has been observed at
    /// `observed_version`.
    pub fn new(partition_key: impl Into<String>, observed_version: PartitionVersion) -> Self {
        Self {
            partition_key: partition_key.into(),
            observed_version,
        }
    }

    /// Returns the partition key this token speaks for.
    #[inline]
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    /// Returns the observed version.
    #[inline]
    pub fn observed_version(&self) -> PartitionVersion {
        self.observed_version
    }
}

impl std::fmt::Display for SessionToken {
    /// Log rendering only. Never parsed.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.partition_key, self.observed_version)
    }
}
