//! Genesis block creation, the zero-vote block that opens every chain.
//!
//! Genesis goes through the same nonce search as every later block, so
//! chain verification re-derives all hashes uniformly with no special
//! case for index zero.

use tally_seal::{find_seal, SealError, SealHeader};
use tally_types::{Digest, Timestamp};

use crate::block::Block;

/// Seal the chain-opening block.
///
/// Genesis carries no votes, the `"0"` sentinel for both its predecessor
/// and its Merkle root, and a real seal at the configured difficulty.
pub fn create_genesis_block(difficulty: u32, now: Timestamp) -> Result<Block, SealError> {
    let header = SealHeader {
        index: 0,
        created_at: now,
        previous_hash: Digest::zero(),
        merkle_root: Digest::zero(),
    };
    let seal = find_seal(&header, difficulty)?;
    Ok(Block {
        index: 0,
        created_at: now,
        votes: Vec::new(),
        previous_hash: Digest::zero(),
        merkle_root: Digest::zero(),
        nonce: seal.nonce,
        hash: seal.digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_seal::meets_difficulty;

    #[test]
    fn genesis_is_deterministic_for_a_fixed_clock() {
        let now = Timestamp::from_millis(1_700_000_000_000);
        let a = create_genesis_block(1, now).unwrap();
        let b = create_genesis_block(1, now).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.nonce, b.nonce);
    }

    #[test]
    fn genesis_has_sentinel_predecessor_and_empty_root() {
        let block = create_genesis_block(1, Timestamp::from_millis(1)).unwrap();
        assert!(block.is_genesis());
        assert!(block.previous_hash.is_zero());
        assert!(block.merkle_root.is_zero());
        assert!(block.votes.is_empty());
    }

    #[test]
    fn genesis_seal_meets_the_requested_difficulty() {
        let block = create_genesis_block(2, Timestamp::from_millis(42)).unwrap();
        assert!(meets_difficulty(&block.hash, 2));
    }
}
