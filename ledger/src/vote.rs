//! Vote records as admitted into the ledger.

use serde::{Deserialize, Serialize};
use tally_digest::sha256_hex_multi;
use tally_types::{CandidateId, Digest, Timestamp, VoterId};

/// A single ballot cast by one voter.
///
/// Constructed by the external submission collaborator and admitted at most
/// once per `voter`. Immutable after admission except for `sealed_in`, which
/// is set on the copy placed into a sealed block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// Opaque unique identifier assigned by the submitter.
    pub id: String,

    /// The registered voter casting this ballot.
    pub voter: VoterId,

    /// The chosen candidate. Opaque here; candidate lists live with the
    /// registration collaborator.
    pub candidate: CandidateId,

    /// Digest standing in for the ballot content.
    pub content_digest: Digest,

    /// Opaque proof string. Only non-emptiness is checked; authenticity is
    /// the signing collaborator's concern.
    pub tamper_tag: String,

    /// When the submitter created the ballot.
    pub submitted_at: Timestamp,

    /// Index of the block this vote was sealed into, `None` while pending.
    pub sealed_in: Option<u64>,
}

impl Vote {
    pub fn new(
        id: impl Into<String>,
        voter: VoterId,
        candidate: CandidateId,
        content_digest: Digest,
        tamper_tag: impl Into<String>,
        submitted_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            voter,
            candidate,
            content_digest,
            tamper_tag: tamper_tag.into(),
            submitted_at,
            sealed_in: None,
        }
    }

    /// The digest recipe the submission collaborator uses for ballot
    /// content: voter, candidate, and submission time in one hash.
    pub fn content_digest_for(
        voter: &VoterId,
        candidate: &CandidateId,
        submitted_at: Timestamp,
    ) -> Digest {
        sha256_hex_multi(&[
            voter.as_str().as_bytes(),
            candidate.as_str().as_bytes(),
            &submitted_at.as_millis().to_be_bytes(),
        ])
    }
}
