//! The sealing difficulty predicate.

use tally_types::Digest;

/// Check that a seal digest carries at least `difficulty` leading `'0'`
/// hex characters.
///
/// Difficulty zero accepts every digest, so sealing degrades to a single
/// hash when the cost is configured away.
pub fn meets_difficulty(digest: &Digest, difficulty: u32) -> bool {
    digest.leading_zeros() >= difficulty
}
