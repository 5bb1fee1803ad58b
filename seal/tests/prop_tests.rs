use proptest::prelude::*;

use tally_seal::{find_seal, meets_difficulty, seal_digest, SealHeader};
use tally_types::{Digest, Timestamp};

fn arb_header() -> impl Strategy<Value = SealHeader> {
    (
        any::<u64>(),
        any::<u64>(),
        "[0-9a-f]{64}",
        "[0-9a-f]{64}",
    )
        .prop_map(|(index, millis, prev, root)| SealHeader {
            index,
            created_at: Timestamp::from_millis(millis),
            previous_hash: Digest::from_hex(prev),
            merkle_root: Digest::from_hex(root),
        })
}

proptest! {
    /// A found seal always passes the difficulty predicate and always
    /// recomputes to the same digest. Low difficulties keep the search
    /// fast enough for a property run.
    #[test]
    fn found_seal_always_valid(header in arb_header(), difficulty in 0u32..=2) {
        let seal = find_seal(&header, difficulty).unwrap();
        prop_assert!(meets_difficulty(&seal.digest, difficulty));
        prop_assert_eq!(seal_digest(&header, seal.nonce), seal.digest);
    }

    /// The nonce search is deterministic.
    #[test]
    fn search_is_deterministic(header in arb_header(), difficulty in 0u32..=1) {
        let a = find_seal(&header, difficulty).unwrap();
        let b = find_seal(&header, difficulty).unwrap();
        prop_assert_eq!(a.nonce, b.nonce);
        prop_assert_eq!(a.digest, b.digest);
    }

    /// Zero difficulty accepts the first nonce for any header.
    #[test]
    fn zero_difficulty_is_free(header in arb_header()) {
        let seal = find_seal(&header, 0).unwrap();
        prop_assert_eq!(seal.nonce, 0);
    }

    /// Difficulty is monotone: a digest meeting D also meets anything
    /// below D.
    #[test]
    fn meeting_difficulty_is_monotone(header in arb_header(), nonce in any::<u64>(), difficulty in 1u32..8) {
        let digest = seal_digest(&header, nonce);
        if meets_difficulty(&digest, difficulty) {
            prop_assert!(meets_difficulty(&digest, difficulty - 1));
        }
    }
}
