//! Item - Immutable stored item
//!
//! Per CONSISTENCY.md §1:
//! - An item is identified by the pair (id, partition key); the partition
//!   key is part of identity, not a filter
//! - The same id in two different partitions names two distinct items
//! - An item carries an opaque payload: a semantic type tag plus key-value
//!   fields
//! - The version is assigned at write time; items never change afterwards
//!
//! All fields are private to enforce immutability.

use serde_json::Value;

use crate::session::PartitionVersion;

/// The opaque payload of a stored item: a semantic type tag plus fields.
///
/// The type tag is compared at read time. A read that expects a different
/// tag than the one stored is a miss, not a decode fault; the store never
/// "successfully" produces an incompatible shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemPayload {
    /// Semantic type tag, e.g. "document" or "employee".
    type_tag: String,
    /// Key-value fields. Opaque to the store.
    fields: Value,
}

impl ItemPayload {
    /// Creates a payload with the given type tag and fields.
    pub fn new(type_tag: impl Into<String>, fields: Value) -> Self {
        Self {
            type_tag: type_tag.into(),
            fields,
        }
    }

    /// Returns the semantic type tag.
    #[inline]
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Returns the key-value fields.
    #[inline]
    pub fn fields(&self) -> &Value {
        &self.fields
    }

    /// Returns true if this payload carries the expected type tag.
    #[inline]
    pub fn matches_type(&self, expected_type: &str) -> bool {
        self.type_tag == expected_type
    }
}

/// A single immutable stored item.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// The item id. Unique within its partition.
    id: String,
    /// The partition key value that routed this item.
    partition_key: String,
    /// The opaque payload.
    payload: ItemPayload,
    /// The version assigned by the ledger at write time.
    version: PartitionVersion,
}

impl Item {
    /// Creates a new item. Only the store constructs items, at write time.
    pub(crate) fn new(
        id: String,
        partition_key: String,
        payload: ItemPayload,
        version: PartitionVersion,
    ) -> Self {
        Self {
            id,
            partition_key,
            payload,
            version,
        }
    }

    /// Returns the item id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the partition key value.
    #[inline]
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    /// Returns the payload.
    #[inline]
    pub fn payload(&self) -> &ItemPayload {
        &self.payload
    }

    /// Returns the write-time version.
    #[inline]
    pub fn version(&self) -> PartitionVersion {
        self.version
    }
}
