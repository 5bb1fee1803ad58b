use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("sealing failed: {0}")]
    Seal(#[from] tally_seal::SealError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("restore failed: {0}")]
    Restore(String),
}

/// A single defect found by chain verification.
///
/// Violations are audit findings, not control-flow errors: verification
/// reports all of them rather than failing on the first.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ChainViolation {
    #[error("block {index}: previous_hash does not match the prior block's hash")]
    LinkageMismatch { index: u64 },

    #[error("block {index}: stored hash does not re-derive from stored fields")]
    SealMismatch { index: u64 },

    #[error("block {index}: merkle_root does not match the contained votes")]
    MerkleMismatch { index: u64 },

    #[error("block {index}: hash has {found} leading zeros, difficulty requires {required}")]
    DifficultyShortfall { index: u64, found: u32, required: u32 },
}
