//! Election facade over the vote ledger and tamper monitor.
//!
//! [`Election`] is the one entry point an embedder needs: it owns the
//! ledger and the monitor under a single lock, captures wall-clock time
//! at each admission, seal, and audit, and keeps running counters for
//! operator dashboards.

pub mod election;

pub use election::{Election, ElectionReport};
