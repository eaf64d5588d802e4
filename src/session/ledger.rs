//! VersionLedger - Central authority for per-partition version counters
//!
//! Per CONSISTENCY.md §2:
//! - The ledger is the sole assigner of partition versions
//! - Counters are monotonic and gap-free: each successful write advances
//!   its partition counter by exactly 1
//! - The first write to an unseen partition is assigned version 1
//! - Reading an unknown partition reports version 0
//!
//! Counter overflow means the ledger is corrupt. It is the one fatal
//! condition in this crate and is surfaced as an unrecoverable error,
//! never a panic.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use super::PartitionVersion;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors from version ledger operations. All variants are fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The partition counter cannot be advanced without wrapping.
    #[error("version counter overflow in partition '{partition_key}': ledger is corrupt")]
    VersionOverflow { partition_key: String },

    /// The counter table is poisoned; its contents can no longer be trusted.
    #[error("version ledger state is poisoned: ledger is corrupt")]
    StatePoisoned,
}

impl LedgerError {
    /// Stable machine-readable code, per ERRORS.md.
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::VersionOverflow { .. } => "NIMBUS_LEDGER_OVERFLOW",
            LedgerError::StatePoisoned => "NIMBUS_LEDGER_POISONED",
        }
    }

    /// Ledger corruption is always fatal.
    pub fn is_fatal(&self) -> bool {
        true
    }
}

/// Central authority for per-partition version counters.
///
/// Per CONSISTENCY.md §6, version assignment for a partition happens while
/// that partition's writer lock is held, so the sequence of versions a
/// partition hands out is strictly increasing with no gaps or duplicates
/// under any interleaving of concurrent writers.
#[derive(Debug, Default)]
pub struct VersionLedger {
    /// Current counter per partition key. Absent means never written.
    counters: RwLock<HashMap<String, u64>>,
}

impl VersionLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically advances and returns the counter for `partition_key`.
    ///
    /// The first call for an unseen partition returns version 1.
    pub fn next_version(&self, partition_key: &str) -> LedgerResult<PartitionVersion> {
        let mut counters = self
            .counters
            .write()
            .map_err(|_| LedgerError::StatePoisoned)?;

        let counter = counters.entry(partition_key.to_string()).or_insert(0);
        let next = counter
            .checked_add(1)
            .ok_or_else(|| LedgerError::VersionOverflow {
                partition_key: partition_key.to_string(),
            })?;
        *counter = next;

        Ok(PartitionVersion::new(next))
    }

    /// Returns the current counter for `partition_key` without mutation.
    ///
    /// Unknown partitions report [`PartitionVersion::ZERO`].
    pub fn current_version(&self, partition_key: &str) -> LedgerResult<PartitionVersion> {
        let counters = self
            .counters
            .read()
            .map_err(|_| LedgerError::StatePoisoned)?;

        Ok(counters
            .get(partition_key)
            .map(|value| PartitionVersion::new(*value))
            .unwrap_or(PartitionVersion::ZERO))
    }
}
