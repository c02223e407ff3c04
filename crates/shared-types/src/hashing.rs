//! # Hashing
//!
//! SHA-256 based digests used for transaction ids, block ids and merkle nodes.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of data.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute double SHA-256 hash.
#[inline]
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}
