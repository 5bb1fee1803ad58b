#![no_main]

use libfuzzer_sys::fuzz_target;

use tally_digest::{compute_root, sha256_hex};
use tally_types::Digest;

// Fuzz Merkle root computation over arbitrary digest lists.
// Ensures the fold never panics and stays deterministic.
fuzz_target!(|data: &[u8]| {
    let digests: Vec<Digest> = data.chunks(8).map(sha256_hex).collect();

    let first = compute_root(&digests);
    let second = compute_root(&digests);
    assert_eq!(first, second);

    if digests.is_empty() {
        assert!(first.is_zero());
    } else {
        assert_eq!(first.as_str().len(), 64);
    }
});
