use proptest::prelude::*;

use tally_types::{CandidateId, Digest, Timestamp, VoterId};

proptest! {
    /// Digest roundtrip: from_bytes -> as_str is always 64 lowercase hex chars.
    #[test]
    fn digest_from_bytes_is_hex(bytes in prop::array::uniform32(0u8..)) {
        let digest = Digest::from_bytes(bytes);
        prop_assert_eq!(digest.as_str().len(), 64);
        prop_assert!(digest.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        prop_assert!(!digest.is_zero());
    }

    /// Digest leading_zeros never exceeds the digest length.
    #[test]
    fn digest_leading_zeros_bounded(bytes in prop::array::uniform32(0u8..)) {
        let digest = Digest::from_bytes(bytes);
        prop_assert!(digest.leading_zeros() as usize <= digest.as_str().len());
    }

    /// Digest bincode serialization roundtrip.
    #[test]
    fn digest_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let digest = Digest::from_bytes(bytes);
        let encoded = bincode::serialize(&digest).unwrap();
        let decoded: Digest = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, digest);
    }

    /// VoterId preserves the raw string exactly.
    #[test]
    fn voter_id_roundtrip(raw in ".{0,64}") {
        let id = VoterId::new(raw.clone());
        prop_assert_eq!(id.as_str(), raw.as_str());
        prop_assert_eq!(id.is_blank(), raw.trim().is_empty());
    }

    /// CandidateId blank check agrees with trimmed emptiness.
    #[test]
    fn candidate_id_blank(raw in "[ \\t]{0,8}") {
        let id = CandidateId::new(raw);
        prop_assert!(id.is_blank());
    }

    /// Timestamp ordering mirrors the underlying milliseconds.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::from_millis(a);
        let tb = Timestamp::from_millis(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta.is_after(tb), a > b);
    }

    /// elapsed_since is exact when `now` is later, and saturates to 0 otherwise.
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::from_millis(base);
        let now = Timestamp::from_millis(base + offset);
        prop_assert_eq!(t.elapsed_since(now), offset);
        // The mirror direction saturates: `t` is never ahead of `now` here.
        prop_assert_eq!(now.elapsed_since(t), 0);
    }

    /// abs_diff is symmetric.
    #[test]
    fn timestamp_abs_diff_symmetric(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::from_millis(a);
        let tb = Timestamp::from_millis(b);
        prop_assert_eq!(ta.abs_diff(tb), tb.abs_diff(ta));
        prop_assert_eq!(ta.abs_diff(tb), a.abs_diff(b));
    }

    /// Timestamp bincode serialization roundtrip.
    #[test]
    fn timestamp_bincode_roundtrip(millis in any::<u64>()) {
        let t = Timestamp::from_millis(millis);
        let encoded = bincode::serialize(&t).unwrap();
        let decoded: Timestamp = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, t);
    }
}
