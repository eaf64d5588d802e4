//! Store error types
//!
//! Per ERRORS.md:
//! - NIMBUS_STORE_POISONED (FATAL) - partition state can no longer be trusted
//! - Ledger errors pass through unchanged; they are fatal at the source
//!
//! Missing items, unknown partitions, and type mismatches are NOT errors.
//! They are reported read outcomes, produced by the read path.

use thiserror::Error;

use crate::session::LedgerError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from partitioned store operations. All variants are fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A partition lock is poisoned; stored state can no longer be trusted.
    #[error("partition state is poisoned for '{partition_key}'")]
    Poisoned { partition_key: String },

    /// Version assignment failed; the ledger is corrupt.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl StoreError {
    /// Stable machine-readable code, per ERRORS.md.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Poisoned { .. } => "NIMBUS_STORE_POISONED",
            StoreError::Ledger(err) => err.code(),
        }
    }

    /// Store corruption is always fatal.
    pub fn is_fatal(&self) -> bool {
        true
    }
}
