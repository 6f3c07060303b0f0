use sha2::{Digest, Sha256};

/// The tree's digest function. Build and verification must agree on it
/// byte-for-byte for proofs to be portable across implementations.
pub fn sha256(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}
