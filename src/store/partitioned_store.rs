//! PartitionedStore - Single source of truth for stored items
//!
//! Per CONSISTENCY.md §6:
//! - Writes to the same partition are serialized: the partition's writer
//!   lock is held across version assignment and the log append, so no
//!   reader ever observes a version without its item or an item without
//!   its version
//! - Writes to different partitions do not contend
//! - Reads take no writer lock and never observe a partially applied write
//!
//! The store always accepts writes; there is no conflict detection. Misses
//! (unknown partition, unknown id, type mismatch) are `None`, not errors.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::session::{PartitionVersion, SessionToken, VersionLedger};

use super::errors::{StoreError, StoreResult};
use super::{Item, ItemPayload, Partition};

/// The result of a successful write: the assigned version and the session
/// token reflecting the partition counter immediately after the write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteResult {
    pub version: PartitionVersion,
    pub session_token: SessionToken,
}

/// Partitioned, in-memory item storage.
pub struct PartitionedStore {
    /// Version authority shared with the read path.
    ledger: Arc<VersionLedger>,
    /// Partition cells, created lazily on first write.
    partitions: RwLock<HashMap<String, Arc<RwLock<Partition>>>>,
}

impl PartitionedStore {
    /// Creates an empty store that assigns versions through `ledger`.
    pub fn new(ledger: Arc<VersionLedger>) -> Self {
        Self {
            ledger,
            partitions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns true if a write has ever created the partition.
    pub fn contains_partition(&self, partition_key: &str) -> bool {
        self.partitions
            .read()
            .map(|map| map.contains_key(partition_key))
            .unwrap_or(false)
    }

    /// Number of partitions created so far.
    pub fn partition_count(&self) -> usize {
        self.partitions.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Writes an item into the partition named by `partition_key`.
    ///
    /// Assigns the partition's next version, appends the item, and returns
    /// the new session token. Always succeeds apart from ledger corruption.
    pub fn write(
        &self,
        id: &str,
        partition_key: &str,
        payload: ItemPayload,
    ) -> StoreResult<WriteResult> {
        let cell = self.partition_cell(partition_key)?;

        // Writer lock held across version assignment and append: versions
        // within a partition are assigned in log order, gap-free.
        let mut partition = cell.write().map_err(|_| StoreError::Poisoned {
            partition_key: partition_key.to_string(),
        })?;

        let version = self.ledger.next_version(partition_key)?;
        partition.append(Item::new(
            id.to_string(),
            partition_key.to_string(),
            payload,
            version,
        ));

        Ok(WriteResult {
            version,
            session_token: SessionToken::new(partition_key, version),
        })
    }

    /// Looks up the exact `(id, partition_key)` identity.
    ///
    /// Returns `None` when the partition does not exist, when the id is
    /// absent from it, or when the stored type tag differs from
    /// `expected_type`. A lookup with the wrong partition key misses even
    /// when the id matches: the partition key is part of identity.
    pub fn read(
        &self,
        id: &str,
        partition_key: &str,
        expected_type: &str,
    ) -> StoreResult<Option<Item>> {
        let cell = {
            let map = self.partitions.read().map_err(|_| StoreError::Poisoned {
                partition_key: partition_key.to_string(),
            })?;
            match map.get(partition_key) {
                Some(cell) => Arc::clone(cell),
                None => return Ok(None),
            }
        };

        let partition = cell.read().map_err(|_| StoreError::Poisoned {
            partition_key: partition_key.to_string(),
        })?;

        Ok(partition
            .find(id)
            .filter(|item| item.payload().matches_type(expected_type))
            .cloned())
    }

    /// Returns the partition cell for `partition_key`, creating it on first
    /// use. Creation takes the map writer lock; steady-state writes only
    /// read the map.
    fn partition_cell(&self, partition_key: &str) -> StoreResult<Arc<RwLock<Partition>>> {
        {
            let map = self.partitions.read().map_err(|_| StoreError::Poisoned {
                partition_key: partition_key.to_string(),
            })?;
            if let Some(cell) = map.get(partition_key) {
                return Ok(Arc::clone(cell));
            }
        }

        let mut map = self.partitions.write().map_err(|_| StoreError::Poisoned {
            partition_key: partition_key.to_string(),
        })?;
        Ok(Arc::clone(
            map.entry(partition_key.to_string())
                .or_insert_with(|| Arc::new(RwLock::new(Partition::new()))),
        ))
    }
}
