//! Content-addressed identity.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a canonical byte sequence.
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
