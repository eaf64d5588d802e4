//! Partition - Ordered write log for one partition key value
//!
//! Per CONSISTENCY.md §1:
//! - A partition is identified by its partition key value
//! - It owns an ordered log of the writes routed to it
//! - Partitions are created lazily on first write and are never merged or
//!   split; they disappear only with store teardown
//!
//! This is a PURE DATA CONTAINER with NO locking and NO version logic.
//! Serialization of writers and version assignment happen in the store and
//! ledger that own it.

use super::Item;

/// The ordered write log of a single partition.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    /// All items written to this partition, in write order.
    log: Vec<Item>,
}

impl Partition {
    /// Creates an empty partition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item to the log.
    ///
    /// This is a structural operation only. The caller is responsible for
    /// holding the partition's writer lock and for version assignment.
    pub fn append(&mut self, item: Item) {
        self.log.push(item);
    }

    /// Finds the most recent item with the given id, if any.
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.log.iter().rev().find(|item| item.id() == id)
    }

    /// Returns the number of items written to this partition.
    #[inline]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Returns true if nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}
