//! Hash-linked vote ledger.
//!
//! Votes are validated at admission, batched, and sealed into blocks whose
//! hashes chain back to genesis. Every block stores enough to re-derive its
//! own hash, so the whole chain can be audited offline from persisted data.

pub mod block;
pub mod config;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod verifier;
pub mod vote;

pub use block::Block;
pub use config::LedgerConfig;
pub use error::{ChainViolation, LedgerError};
pub use genesis::create_genesis_block;
pub use ledger::{Admission, ChainSummary, Ledger};
pub use verifier::{verify_vote, RejectReason};
pub use vote::Vote;
