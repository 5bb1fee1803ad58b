//! Merkle root aggregation over vote digests.
//!
//! Blocks commit to their votes through a single root rather than by
//! hashing every vote into the seal header. Pairing operates on the hex
//! text of each digest, so the root is reproducible from serialized data
//! without access to the original vote bytes.

use tally_types::Digest;

use crate::hash::sha256_hex_multi;

/// Fold a list of digests into a single Merkle root.
///
/// Adjacent digests are combined by hashing the concatenation of their
/// hex text. A level with an odd count duplicates its last digest. The
/// empty list folds to the zero sentinel and a single digest is its own
/// root. Order-sensitive: admission order is part of the commitment.
pub fn compute_root(digests: &[Digest]) -> Digest {
    let mut level: Vec<Digest> = digests.to_vec();
    loop {
        match level.as_slice() {
            [] => return Digest::zero(),
            [root] => return root.clone(),
            _ => {}
        }
        level = level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                sha256_hex_multi(&[left.as_str().as_bytes(), right.as_str().as_bytes()])
            })
            .collect();
    }
}
