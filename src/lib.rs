//! nimbusdb - A deterministic, in-process simulator of a partitioned,
//! session-consistent document store
//!
//! The core models the read-path behavior of a managed document database:
//! partitioned item storage, per-partition version counters, session
//! tokens as minimum-freshness assertions, and a read path that reports
//! misses and consistency rejections as outcomes rather than faults.
//! A scenario suite drives the core the way a client of the real thing
//! would. See CONSISTENCY.md for the model.

pub mod cli;
pub mod client;
pub mod observability;
pub mod read_path;
pub mod scenario;
pub mod session;
pub mod store;
