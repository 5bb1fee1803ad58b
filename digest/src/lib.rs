//! Digest utilities for the tally ledger.
//!
//! - **SHA-256** for vote digests and block seals, rendered as lowercase hex
//! - **Merkle aggregation** folding a block's vote digests into one root

pub mod hash;
pub mod merkle;

pub use hash::{sha256_hex, sha256_hex_multi};
pub use merkle::compute_root;
