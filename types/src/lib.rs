//! Fundamental types for the tally vote ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: digests, identifiers and timestamps.

pub mod digest;
pub mod id;
pub mod time;

pub use digest::Digest;
pub use id::{CandidateId, VoterId};
pub use time::Timestamp;
