//! The tamper monitor: at-admission screening, pattern scans, statistics.
//!
//! The monitor owns only its activity log. Chain state is always passed in
//! by reference, so it can watch any ledger without holding one.

use serde::{Deserialize, Serialize};
use tally_ledger::{Ledger, RejectReason, Vote};
use tally_types::Timestamp;

use crate::activity::{ActivityKind, Severity, SuspiciousActivity};
use crate::integrity::IntegrityReport;

const HOUR_MILLIS: u64 = 60 * 60 * 1000;

/// Aggregated activity statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TamperStats {
    pub total_activities: u64,
    pub by_severity: SeverityCounts,
    /// Entries recorded within the hour before the audit time.
    pub recent_activities: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
}

/// Records suspicious submissions and voting patterns against a ledger.
#[derive(Default)]
pub struct TamperMonitor {
    activities: Vec<SuspiciousActivity>,
}

impl TamperMonitor {
    /// Retention used by callers that prune on a schedule.
    pub const DEFAULT_RETENTION_HOURS: u64 = 24;

    pub fn new() -> Self {
        Self::default()
    }

    /// Screen a submission before it reaches the ledger.
    ///
    /// Checks run in a fixed order and the first hit wins: blank voter id,
    /// blank tamper tag, duplicate voter, blank content digest. Every hit
    /// records a high-severity activity and yields the reason the caller
    /// should reject with.
    pub fn screen(
        &mut self,
        ledger: &Ledger,
        vote: &Vote,
        now: Timestamp,
    ) -> Option<RejectReason> {
        if vote.voter.is_blank() {
            self.record_screen_hit(ActivityKind::InvalidVoterId, vote, now);
            return Some(RejectReason::InvalidVoterId);
        }
        if vote.tamper_tag.trim().is_empty() {
            self.record_screen_hit(ActivityKind::InvalidTamperTag, vote, now);
            return Some(RejectReason::MissingTamperTag);
        }
        if ledger.has_voted(&vote.voter) {
            self.record_screen_hit(ActivityKind::DuplicateVoteAttempt, vote, now);
            return Some(RejectReason::DuplicateVoter);
        }
        if vote.content_digest.is_blank() {
            self.record_screen_hit(ActivityKind::HashTampering, vote, now);
            return Some(RejectReason::MissingVoteHash);
        }
        None
    }

    /// Record a ledger-level rejection that the screen did not get to see.
    ///
    /// Embedders driving `Ledger::admit_vote` directly call this with the
    /// rejection so screened kinds still reach the activity log. Reasons
    /// outside the screened vocabulary (the candidate check) are ignored.
    pub fn observe_rejection(&mut self, vote: &Vote, reason: &RejectReason, now: Timestamp) {
        let kind = match reason {
            RejectReason::InvalidVoterId => ActivityKind::InvalidVoterId,
            RejectReason::MissingTamperTag => ActivityKind::InvalidTamperTag,
            RejectReason::DuplicateVoter => ActivityKind::DuplicateVoteAttempt,
            RejectReason::MissingVoteHash => ActivityKind::HashTampering,
            RejectReason::InvalidCandidateId => return,
        };
        self.record_screen_hit(kind, vote, now);
    }

    /// Scan the admitted history for anomalous patterns around a vote.
    ///
    /// Runs after an accepted admission, so the vote itself is part of the
    /// history it is compared against. Findings never undo the admission;
    /// only the anomaly is recorded.
    pub fn scan_patterns(&mut self, ledger: &Ledger, vote: &Vote, now: Timestamp) {
        let in_window = ledger
            .history_votes()
            .filter(|v| v.submitted_at.abs_diff(vote.submitted_at) < 60_000)
            .count();
        if in_window > 5 {
            self.record(
                ActivityKind::RapidVoting,
                format!(
                    "Rapid voting pattern detected around {}",
                    vote.submitted_at
                ),
                Severity::Medium,
                now,
            );
        }

        let identical = ledger
            .history_votes()
            .filter(|v| v.submitted_at == vote.submitted_at)
            .count();
        if identical > 3 {
            self.record(
                ActivityKind::BatchTampering,
                "Multiple votes with identical timestamp detected".to_string(),
                Severity::High,
                now,
            );
        }
    }

    /// Audit the ledger's integrity. See [`crate::integrity::verify_integrity`].
    pub fn verify_integrity(&self, ledger: &Ledger, now: Timestamp) -> IntegrityReport {
        crate::integrity::verify_integrity(ledger, now)
    }

    /// The full activity log, oldest first.
    pub fn activities(&self) -> &[SuspiciousActivity] {
        &self.activities
    }

    pub fn stats(&self, now: Timestamp) -> TamperStats {
        let hour_ago = now.as_millis().saturating_sub(HOUR_MILLIS);
        let mut by_severity = SeverityCounts::default();
        for activity in &self.activities {
            match activity.severity {
                Severity::Low => by_severity.low += 1,
                Severity::Medium => by_severity.medium += 1,
                Severity::High => by_severity.high += 1,
            }
        }
        TamperStats {
            total_activities: self.activities.len() as u64,
            by_severity,
            recent_activities: self
                .activities
                .iter()
                .filter(|a| a.at.as_millis() > hour_ago)
                .count() as u64,
        }
    }

    /// Drop activities recorded more than `hours` before `now`.
    ///
    /// Never runs automatically; memory reclamation is an explicit caller
    /// decision (see `DEFAULT_RETENTION_HOURS`).
    pub fn prune_older_than(&mut self, hours: u64, now: Timestamp) {
        let cutoff = now.as_millis().saturating_sub(hours.saturating_mul(HOUR_MILLIS));
        let before = self.activities.len();
        self.activities.retain(|a| a.at.as_millis() > cutoff);
        let removed = before - self.activities.len();
        if removed > 0 {
            tracing::debug!(removed, hours, "pruned old activities");
        }
    }

    fn record_screen_hit(&mut self, kind: ActivityKind, vote: &Vote, now: Timestamp) {
        let description = match kind {
            ActivityKind::InvalidVoterId => {
                format!("Invalid voter ID detected for vote {}", vote.id)
            }
            ActivityKind::InvalidTamperTag => {
                format!("Invalid tamper tag detected for vote {}", vote.id)
            }
            ActivityKind::DuplicateVoteAttempt => {
                format!("Duplicate vote attempt detected for voter {}", vote.voter)
            }
            ActivityKind::HashTampering => {
                format!("Invalid vote hash detected for vote {}", vote.id)
            }
            ActivityKind::RapidVoting | ActivityKind::BatchTampering => {
                format!("Pattern anomaly recorded for vote {}", vote.id)
            }
        };
        self.record(kind, description, Severity::High, now);
    }

    fn record(
        &mut self,
        kind: ActivityKind,
        description: String,
        severity: Severity,
        now: Timestamp,
    ) {
        if severity == Severity::High {
            tracing::warn!(kind = kind.as_str(), %description, "tamper detection");
        } else {
            tracing::debug!(kind = kind.as_str(), %description, "tamper detection");
        }
        self.activities.push(SuspiciousActivity {
            at: now,
            kind,
            description,
            severity,
        });
    }
}
