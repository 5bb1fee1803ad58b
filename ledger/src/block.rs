//! Sealed blocks of the vote chain.

use serde::{Deserialize, Serialize};
use tally_seal::SealHeader;
use tally_types::{Digest, Timestamp};

use crate::vote::Vote;

/// A sealed block in the vote chain.
///
/// Stores everything needed to re-derive `hash` independently: the header
/// fields plus the winning nonce. Votes are immutable once sealed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    /// Sequential position, zero for genesis.
    pub index: u64,

    /// When this block was sealed.
    pub created_at: Timestamp,

    /// The votes committed by this block, in admission order.
    pub votes: Vec<Vote>,

    /// Hash of the prior block, the `"0"` sentinel for genesis.
    pub previous_hash: Digest,

    /// Merkle root over `votes`' content digests, `"0"` when empty.
    pub merkle_root: Digest,

    /// The nonce that made `hash` meet the sealing difficulty.
    pub nonce: u64,

    /// The seal digest of this block.
    pub hash: Digest,
}

impl Block {
    /// The bound header fields, as fed to the nonce search.
    pub fn seal_header(&self) -> SealHeader {
        SealHeader {
            index: self.index,
            created_at: self.created_at,
            previous_hash: self.previous_hash.clone(),
            merkle_root: self.merkle_root.clone(),
        }
    }

    /// The content digests this block's Merkle root commits to.
    pub fn vote_digests(&self) -> Vec<Digest> {
        self.votes.iter().map(|v| v.content_digest.clone()).collect()
    }

    /// Whether this is the chain-opening block.
    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }
}
