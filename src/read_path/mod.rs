//! The session-consistent read path
//!
//! Per CONSISTENCY.md §4:
//! - `ReadRequest` - Identity, expected type, optional freshness token
//! - `ReadOutcome` / `OutcomeKind` - Reported outcomes callers branch on
//! - `ReadPathEngine` - The policy: resolve, snapshot, check, look up

mod engine;
mod outcome;
mod request;

pub use engine::ReadPathEngine;
pub use outcome::{OutcomeKind, ReadOutcome};
pub use request::ReadRequest;
