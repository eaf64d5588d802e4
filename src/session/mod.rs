//! Session Consistency Domain Types
//!
//! Per CONSISTENCY.md:
//! - Defines the session-consistency vocabulary in code
//! - Encodes the version and token invariants structurally
//!
//! This module provides:
//! - `PartitionVersion` - Ordered per-partition write identity
//! - `SessionToken` - (partition, version) minimum-freshness assertion
//! - `VersionLedger` - Central authority for per-partition counters
//! - `SessionState` - Per-client token bookkeeping

mod ledger;
mod state;
mod token;
mod version;

pub use ledger::{LedgerError, LedgerResult, VersionLedger};
pub use state::SessionState;
pub use token::SessionToken;
pub use version::PartitionVersion;
