//! Hex-encoded digest type used for vote content, Merkle roots and block hashes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hex-encoded digest, usually 64 lowercase hex characters of SHA-256.
///
/// Two non-hash values are legal by construction: the `"0"` sentinel (the
/// genesis block's previous-hash and the Merkle root of an empty batch) and
/// caller-supplied vote content digests, which the ledger treats as opaque
/// text and never decodes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// The sentinel digest, rendered as `"0"`.
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Wrap an already-encoded digest string without validating it.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Hex-encode 32 raw hash bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `"0"` sentinel.
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Whether the digest text is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Count of leading `'0'` characters in the digest text.
    ///
    /// This is the quantity the sealing difficulty predicate is defined over.
    pub fn leading_zeros(&self) -> u32 {
        self.0.bytes().take_while(|b| *b == b'0').count() as u32
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= 8 {
            write!(f, "Digest({})", self.0)
        } else {
            write!(f, "Digest({}\u{2026})", &self.0[..8])
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
