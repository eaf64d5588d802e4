//! ReadPathEngine - Consistency policy enforcement
//!
//! Per CONSISTENCY.md §4 - This module implements the EXACT read rule:
//!
//! 1. Resolve the partition. If it has never been written, the outcome is
//!    `NotFound` regardless of any token.
//! 2. Take ONE ledger snapshot. If a token is attached and it demands a
//!    version above the snapshot, the outcome is
//!    `ConsistencyNotYetAvailable` - distinct from `NotFound`: the
//!    demanded version does not exist yet.
//! 3. Look the item up by exact identity and expected type. A miss or a
//!    type mismatch is `NotFound`.
//! 4. Otherwise the outcome is `Found`, carrying a token at the snapshot
//!    version so the caller's session stays monotonic going forward.
//!
//! The snapshot from step 2 is used for the whole read; a write that lands
//! between steps is observed in full by the next read or not at all.

use std::sync::Arc;

use crate::session::{SessionToken, VersionLedger};
use crate::store::{PartitionedStore, StoreResult};

use super::{ReadOutcome, ReadRequest};

/// Executes read requests against the shared store and ledger.
///
/// The engine is stateless: identical requests against identical store and
/// ledger state produce identical outcomes.
#[derive(Clone)]
pub struct ReadPathEngine {
    store: Arc<PartitionedStore>,
    ledger: Arc<VersionLedger>,
}

impl ReadPathEngine {
    /// Creates an engine over the shared store and ledger.
    pub fn new(store: Arc<PartitionedStore>, ledger: Arc<VersionLedger>) -> Self {
        Self { store, ledger }
    }

    /// Executes one read request.
    ///
    /// `NotFound` and `ConsistencyNotYetAvailable` are reported outcomes.
    /// The only `Err` is store or ledger corruption, which is fatal.
    pub fn execute(&self, request: &ReadRequest) -> StoreResult<ReadOutcome> {
        // Step 1: resolve the partition.
        if !self.store.contains_partition(request.partition_key()) {
            return Ok(ReadOutcome::NotFound);
        }

        // Step 2: one ledger snapshot for the whole read.
        let available = self.ledger.current_version(request.partition_key())?;
        if let Some(token) = request.session_token() {
            let required = token.observed_version();
            if required > available {
                return Ok(ReadOutcome::ConsistencyNotYetAvailable {
                    required,
                    available,
                });
            }
        }

        // Step 3: exact identity and type lookup.
        let item = match self.store.read(
            request.id(),
            request.partition_key(),
            request.expected_type(),
        )? {
            Some(item) => item,
            None => return Ok(ReadOutcome::NotFound),
        };

        // Step 4: success, with a token at the snapshot version.
        Ok(ReadOutcome::Found {
            session_token: SessionToken::new(request.partition_key(), available),
            item,
        })
    }
}
