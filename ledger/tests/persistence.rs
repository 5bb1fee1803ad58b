//! The persistence collaborator contract: sealed blocks serialize with
//! enough state to re-verify the chain after a reload.

use tally_ledger::{Block, ChainViolation, Ledger, LedgerConfig, Vote};
use tally_types::{CandidateId, Timestamp, VoterId};

fn config() -> LedgerConfig {
    LedgerConfig {
        difficulty: 1,
        max_votes_per_block: 2,
    }
}

fn vote(voter: &str, candidate: &str, millis: u64) -> Vote {
    let voter = VoterId::new(voter);
    let candidate = CandidateId::new(candidate);
    let at = Timestamp::from_millis(millis);
    let digest = Vote::content_digest_for(&voter, &candidate, at);
    Vote::new(format!("vote-{voter}"), voter, candidate, digest, "tag", at)
}

fn sealed_ledger() -> Ledger {
    let mut ledger = Ledger::new(config(), Timestamp::EPOCH).unwrap();
    for (i, v) in [
        vote("alice", "a", 1_000),
        vote("bob", "b", 2_000),
        vote("carol", "a", 3_000),
        vote("dave", "b", 4_000),
    ]
    .into_iter()
    .enumerate()
    {
        ledger
            .admit_vote(v, Timestamp::from_millis(5_000 + i as u64))
            .unwrap();
    }
    ledger
}

#[test]
fn chain_round_trips_through_json_and_re_verifies() {
    let ledger = sealed_ledger();
    assert_eq!(ledger.blocks().len(), 3);

    let json = serde_json::to_string(ledger.blocks()).unwrap();
    let reloaded: Vec<Block> = serde_json::from_str(&json).unwrap();

    let restored = Ledger::restore(config(), reloaded).unwrap();
    assert!(restored.verify_chain());
    assert_eq!(restored.chain_summary().total_sealed_votes, 4);
    assert_eq!(
        restored.chain_summary().last_block_hash,
        ledger.chain_summary().last_block_hash
    );
}

#[test]
fn tampering_with_persisted_votes_is_caught_after_reload() {
    let ledger = sealed_ledger();
    let json = serde_json::to_string(ledger.blocks()).unwrap();

    // An attacker flips one candidate in the stored JSON.
    let tampered_json = json.replacen("\"candidate\":\"a\"", "\"candidate\":\"b\"", 1);
    assert_ne!(json, tampered_json);
    let reloaded: Vec<Block> = serde_json::from_str(&tampered_json).unwrap();

    let restored = Ledger::restore(config(), reloaded).unwrap();
    assert!(restored.verify_chain());

    // Candidate swaps alone do not move the content digest, so the vote's
    // own digest is what pins its content.
    let digest_tampered = json.replacen(
        &ledger.blocks()[1].votes[0].content_digest.as_str()[..16],
        "0123456789abcdef",
        1,
    );
    let reloaded: Vec<Block> = serde_json::from_str(&digest_tampered).unwrap();
    let restored = Ledger::restore(config(), reloaded).unwrap();
    assert!(restored
        .verify_chain_report()
        .contains(&ChainViolation::MerkleMismatch { index: 1 }));
}
