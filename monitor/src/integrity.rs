//! Chain-level integrity auditing.
//!
//! Combines the ledger's own chain verification with two anomaly scans
//! the chain cannot express: content digests shared by several votes, and
//! votes stamped in the future relative to the audit time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tally_ledger::{ChainViolation, Ledger};
use tally_types::{Digest, Timestamp};
use thiserror::Error;

/// One finding of the integrity audit.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IntegrityIssue {
    #[error("chain violation: {0}")]
    Chain(ChainViolation),

    #[error("content digest {digest} is shared by {count} votes")]
    DigestCollision { digest: Digest, count: usize },

    #[error("vote {vote_id} is timestamped {at}, after the audit time")]
    FutureTimestamp { vote_id: String, at: Timestamp },
}

/// The audit verdict: intact, or a list of everything found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub is_intact: bool,
    pub issues: Vec<IntegrityIssue>,
}

/// Audit a ledger: chain re-derivation, digest uniqueness, clock sanity.
///
/// Scans run over the full admitted history, sealed and pending alike.
/// Findings are reported in deterministic admission order.
pub fn verify_integrity(ledger: &Ledger, now: Timestamp) -> IntegrityReport {
    let mut issues: Vec<IntegrityIssue> = ledger
        .verify_chain_report()
        .into_iter()
        .map(IntegrityIssue::Chain)
        .collect();

    let mut occurrences: HashMap<&Digest, usize> = HashMap::new();
    for vote in ledger.history_votes() {
        *occurrences.entry(&vote.content_digest).or_insert(0) += 1;
    }
    let mut reported: Vec<&Digest> = Vec::new();
    for vote in ledger.history_votes() {
        let count = occurrences[&vote.content_digest];
        if count > 1 && !reported.contains(&&vote.content_digest) {
            reported.push(&vote.content_digest);
            issues.push(IntegrityIssue::DigestCollision {
                digest: vote.content_digest.clone(),
                count,
            });
        }
    }

    for vote in ledger.history_votes() {
        if vote.submitted_at.is_after(now) {
            issues.push(IntegrityIssue::FutureTimestamp {
                vote_id: vote.id.clone(),
                at: vote.submitted_at,
            });
        }
    }

    IntegrityReport {
        is_intact: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_ledger::{LedgerConfig, Vote};
    use tally_types::{CandidateId, VoterId};

    fn test_ledger(max_votes_per_block: usize) -> Ledger {
        let config = LedgerConfig {
            difficulty: 1,
            max_votes_per_block,
        };
        Ledger::new(config, Timestamp::EPOCH).unwrap()
    }

    fn vote(voter: &str, candidate: &str, millis: u64) -> Vote {
        let voter = VoterId::new(voter);
        let candidate = CandidateId::new(candidate);
        let at = Timestamp::from_millis(millis);
        let digest = Vote::content_digest_for(&voter, &candidate, at);
        Vote::new(format!("vote-{voter}"), voter, candidate, digest, "tag", at)
    }

    #[test]
    fn untouched_ledger_audits_clean() {
        let mut ledger = test_ledger(2);
        let now = Timestamp::from_millis(50_000);
        ledger.admit_vote(vote("alice", "a", 1_000), now).unwrap();
        ledger.admit_vote(vote("bob", "b", 2_000), now).unwrap();

        let report = verify_integrity(&ledger, now);
        assert!(report.is_intact);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn shared_content_digests_are_reported_once_with_count() {
        let mut ledger = test_ledger(10);
        let now = Timestamp::from_millis(50_000);
        let shared = Vote::content_digest_for(
            &VoterId::new("alice"),
            &CandidateId::new("a"),
            Timestamp::from_millis(1_000),
        );

        for (i, voter) in ["alice", "bob", "carol"].iter().enumerate() {
            let mut v = vote(voter, "a", 1_000 + i as u64);
            v.content_digest = shared.clone();
            ledger.admit_vote(v, now).unwrap();
        }

        let report = verify_integrity(&ledger, now);
        assert!(!report.is_intact);
        assert_eq!(
            report.issues,
            vec![IntegrityIssue::DigestCollision {
                digest: shared,
                count: 3
            }]
        );
    }

    #[test]
    fn votes_from_the_future_are_flagged() {
        let mut ledger = test_ledger(10);
        let admit_now = Timestamp::from_millis(50_000);
        ledger
            .admit_vote(vote("alice", "a", 90_000), admit_now)
            .unwrap();
        ledger
            .admit_vote(vote("bob", "b", 1_000), admit_now)
            .unwrap();

        let report = verify_integrity(&ledger, Timestamp::from_millis(50_000));
        assert!(!report.is_intact);
        assert_eq!(
            report.issues,
            vec![IntegrityIssue::FutureTimestamp {
                vote_id: "vote-alice".to_string(),
                at: Timestamp::from_millis(90_000)
            }]
        );

        // At or before the audit instant is not "future".
        let later = verify_integrity(&ledger, Timestamp::from_millis(90_000));
        assert!(later.is_intact);
    }
}
