//! Admission-time vote validation.
//!
//! Intentionally shallow: field presence and the one-vote-per-voter rule.
//! Cryptographic verification of the tamper tag belongs to an external
//! collaborator, not to the ledger.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::Ledger;
use crate::vote::Vote;

/// Why a vote was refused admission.
///
/// The display strings are a fixed vocabulary consumed by external
/// callers; rewording them is a breaking change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("Invalid voter ID")]
    InvalidVoterId,

    #[error("Invalid candidate ID")]
    InvalidCandidateId,

    #[error("Invalid vote hash")]
    MissingVoteHash,

    /// Produced by the tamper monitor's screen, never by `verify_vote`.
    #[error("Invalid tamper tag")]
    MissingTamperTag,

    #[error("Voter has already voted")]
    DuplicateVoter,
}

/// Validate a vote against the ledger's current history.
///
/// Checks run in a fixed order and the first failure wins.
pub fn verify_vote(ledger: &Ledger, vote: &Vote) -> Result<(), RejectReason> {
    if vote.voter.is_blank() {
        return Err(RejectReason::InvalidVoterId);
    }
    if vote.candidate.is_blank() {
        return Err(RejectReason::InvalidCandidateId);
    }
    if vote.content_digest.is_blank() {
        return Err(RejectReason::MissingVoteHash);
    }
    if ledger.has_voted(&vote.voter) {
        return Err(RejectReason::DuplicateVoter);
    }
    Ok(())
}
