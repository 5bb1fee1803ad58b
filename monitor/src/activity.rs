//! Suspicious activity records.

use serde::{Deserialize, Serialize};
use tally_types::Timestamp;

/// How alarming a recorded activity is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// What category of anomaly was observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Blank voter id on a submission.
    InvalidVoterId,
    /// Blank tamper tag on a submission.
    InvalidTamperTag,
    /// A voter who already has an admitted vote tried again.
    DuplicateVoteAttempt,
    /// Blank content digest on a submission.
    HashTampering,
    /// More than five admitted votes inside one 60-second window.
    RapidVoting,
    /// More than three admitted votes sharing one exact timestamp.
    BatchTampering,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::InvalidVoterId => "invalid_voter_id",
            ActivityKind::InvalidTamperTag => "invalid_tamper_tag",
            ActivityKind::DuplicateVoteAttempt => "duplicate_vote_attempt",
            ActivityKind::HashTampering => "hash_tampering",
            ActivityKind::RapidVoting => "rapid_voting",
            ActivityKind::BatchTampering => "batch_tampering",
        }
    }
}

/// One entry in the monitor's activity log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspiciousActivity {
    /// When the monitor recorded the entry.
    pub at: Timestamp,
    pub kind: ActivityKind,
    pub description: String,
    pub severity: Severity,
}
