//! SHA-256 hashing for votes and block seals.

use sha2::{Digest as _, Sha256};
use tally_types::Digest;

/// Compute the SHA-256 digest of arbitrary data as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    Digest::from_bytes(output)
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_hex_multi(parts: &[&[u8]]) -> Digest {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    Digest::from_bytes(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_deterministic() {
        let h1 = sha256_hex(b"hello tally");
        let h2 = sha256_hex(b"hello tally");
        assert_eq!(h1, h2);
    }

    #[test]
    fn sha256_different_inputs() {
        let h1 = sha256_hex(b"hello");
        let h2 = sha256_hex(b"world");
        assert_ne!(h1, h2);
    }

    #[test]
    fn sha256_empty_is_well_known_vector() {
        let h = sha256_hex(b"");
        assert_eq!(
            h.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_hex_shape() {
        let h = sha256_hex(b"shape check");
        assert_eq!(h.as_str().len(), 64);
        assert!(h.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(h.as_str(), h.as_str().to_lowercase());
    }

    #[test]
    fn sha256_multi_equivalent() {
        let single = sha256_hex(b"helloworld");
        let multi = sha256_hex_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn sha256_multi_empty_parts() {
        let none = sha256_hex_multi(&[]);
        let empty = sha256_hex(b"");
        assert_eq!(none, empty);
    }
}
