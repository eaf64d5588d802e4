//! Read request envelope
//!
//! Carries everything a single read needs: the item identity, the expected
//! semantic type, and an optional session token expressing a minimum
//! freshness requirement.

use crate::session::SessionToken;

/// A single read request against the partitioned store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadRequest {
    /// The item id to look up.
    id: String,
    /// The partition key value that is part of the item's identity.
    partition_key: String,
    /// The semantic type tag the caller expects to read.
    expected_type: String,
    /// Optional freshness requirement. `None` means the read is satisfied
    /// by whatever the store currently holds.
    session_token: Option<SessionToken>,
}

impl ReadRequest {
    /// Creates a read request without a freshness requirement.
    pub fn new(
        id: impl Into<String>,
        partition_key: impl Into<String>,
        expected_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            partition_key: partition_key.into(),
            expected_type: expected_type.into(),
            session_token: None,
        }
    }

    /// Attaches a session token to this request.
    pub fn with_session_token(mut self, token: SessionToken) -> Self {
        self.session_token = Some(token);
        self
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

    /// Returns the expected semantic type tag.
    #[inline]
    pub fn expected_type(&self) -> &str {
        &self.expected_type
    }

    /// Returns the attached session token, if any.
    #[inline]
    pub fn session_token(&self) -> Option<&SessionToken> {
        self.session_token.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PartitionVersion;

    #[test]
    fn test_request_without_token() {
        let request = ReadRequest::new("a", "p", "document");
        assert_eq!(request.id(), "a");
        assert_eq!(request.partition_key(), "p");
        assert_eq!(request.expected_type(), "document");
        assert!(request.session_token().is_none());
    }

    #[test]
    fn test_request_with_token() {
        let token = SessionToken::new("p", PartitionVersion::new(4));
        let request = ReadRequest::new("a", "p", "document").with_session_token(token.clone());
        assert_eq!(request.session_token(), Some(&token));
    }
}
