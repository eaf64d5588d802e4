//! Client error types
//!
//! Per ERRORS.md:
//! - NIMBUS_INVALID_REQUEST (ERROR) - malformed id or partition key
//! - NIMBUS_SESSION_CLOSED (ERROR) - operation on a closed client session
//! - Store/ledger corruption passes through and stays FATAL
//!
//! Read misses and consistency rejections are NOT errors; they are
//! `ReadOutcome` variants the caller branches on.

use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced at the client boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request never reached the store: the id or partition key is
    /// malformed (e.g. empty).
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// The client session has been closed; its session state is gone.
    #[error("client session '{session_id}' is closed")]
    SessionClosed { session_id: Uuid },

    /// Store or ledger corruption. Unrecoverable.
    #[error(transparent)]
    Corruption(#[from] StoreError),
}

impl ClientError {
    /// Creates an invalid-request error.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        ClientError::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code, per ERRORS.md.
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::InvalidRequest { .. } => "NIMBUS_INVALID_REQUEST",
            ClientError::SessionClosed { .. } => "NIMBUS_SESSION_CLOSED",
            ClientError::Corruption(err) => err.code(),
        }
    }

    /// Returns true for unrecoverable errors.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClientError::Corruption(_))
    }
}
