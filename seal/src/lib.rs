//! Proof-of-work block sealing.
//!
//! Not mining for reward, a fixed computational cost that makes silently
//! rewriting a sealed block expensive: any change to a block's contents
//! invalidates its seal and every seal after it. Difficulty counts leading
//! `'0'` hex characters of the seal digest.

pub mod difficulty;
pub mod error;
pub mod sealer;

pub use difficulty::meets_difficulty;
pub use error::SealError;
pub use sealer::{find_seal, seal_digest, SealHeader};

use tally_types::Digest;

/// The result of a successful nonce search.
#[derive(Clone, Debug)]
pub struct BlockSeal {
    pub nonce: u64,
    pub digest: Digest,
}
