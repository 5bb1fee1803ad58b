//! Seal digest computation and the nonce search.

use tally_digest::sha256_hex_multi;
use tally_types::{Digest, Timestamp};

use crate::difficulty::meets_difficulty;
use crate::{BlockSeal, SealError};

/// The bound fields of a block, everything the seal commits to except
/// the nonce itself.
#[derive(Clone, Debug)]
pub struct SealHeader {
    pub index: u64,
    pub created_at: Timestamp,
    pub previous_hash: Digest,
    pub merkle_root: Digest,
}

/// Compute the seal digest for a header at a given nonce.
///
/// This is the single source of truth for block hashes: sealing searches
/// over it and chain verification recomputes it. Integer fields hash as
/// big-endian bytes, digest fields as their hex text.
pub fn seal_digest(header: &SealHeader, nonce: u64) -> Digest {
    sha256_hex_multi(&[
        &header.index.to_be_bytes(),
        &header.created_at.as_millis().to_be_bytes(),
        header.previous_hash.as_str().as_bytes(),
        header.merkle_root.as_str().as_bytes(),
        &nonce.to_be_bytes(),
    ])
}

/// Search nonces from zero until the seal digest meets the difficulty.
///
/// Sequential and deterministic: the same header and difficulty always
/// produce the same seal. The only failure is exhausting the full `u64`
/// nonce space, which signals a misconfigured difficulty rather than a
/// validation problem.
pub fn find_seal(header: &SealHeader, difficulty: u32) -> Result<BlockSeal, SealError> {
    let mut nonce: u64 = 0;
    loop {
        let digest = seal_digest(header, nonce);
        if meets_difficulty(&digest, difficulty) {
            return Ok(BlockSeal { nonce, digest });
        }
        nonce = nonce
            .checked_add(1)
            .ok_or(SealError::NonceSpaceExhausted { difficulty })?;
    }
}
