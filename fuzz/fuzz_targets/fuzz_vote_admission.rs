#![no_main]

use libfuzzer_sys::fuzz_target;

use tally_ledger::{Ledger, LedgerConfig, Vote};
use tally_types::{CandidateId, Timestamp, VoterId};

// Fuzz vote admission with arbitrary voter/candidate strings and
// timestamps. Admission must never panic on any input, and the chain
// must still verify after every sequence of admissions and seals.
fuzz_target!(|data: &[u8]| {
    let config = LedgerConfig {
        difficulty: 0,
        max_votes_per_block: 4,
    };
    let mut ledger = match Ledger::new(config, Timestamp::EPOCH) {
        Ok(ledger) => ledger,
        Err(_) => return,
    };

    for (i, chunk) in data.chunks_exact(16).enumerate() {
        let voter = VoterId::new(String::from_utf8_lossy(&chunk[..4]).into_owned());
        let candidate = CandidateId::new(String::from_utf8_lossy(&chunk[4..8]).into_owned());
        let millis = u64::from_le_bytes([
            chunk[8], chunk[9], chunk[10], chunk[11],
            chunk[12], chunk[13], chunk[14], chunk[15],
        ]);
        let at = Timestamp::from_millis(millis);

        let digest = Vote::content_digest_for(&voter, &candidate, at);
        let vote = Vote::new(format!("vote-{i}"), voter, candidate, digest, "tag", at);

        // Difficulty 0 seals on the first nonce, so this cannot fail;
        // it must also never panic.
        let _ = ledger.admit_vote(vote, at);
    }

    let _ = ledger.force_seal(Timestamp::EPOCH);
    assert!(ledger.verify_chain());
});
