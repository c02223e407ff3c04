//! # Merkle Tree
//!
//! Binary merkle tree over transaction ids. Each level hashes adjacent pairs
//! with double SHA-256; an odd node at the end of a level is paired with
//! itself.

use crate::entities::Hash256;
use crate::hashing::sha256d;

fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left.as_bytes());
    buf[32..].copy_from_slice(right.as_bytes());
    Hash256::from_bytes(sha256d(&buf))
}

/// Build every level of the tree, leaves first, root last.
///
/// Returns an empty vector for no leaves.
pub fn build_merkle_tree(leaves: &[Hash256]) -> Vec<Hash256> {
    let mut tree: Vec<Hash256> = leaves.to_vec();
    let mut level_start = 0;
    let mut level_len = leaves.len();

    while level_len > 1 {
        for i in (0..level_len).step_by(2) {
            let right = (i + 1).min(level_len - 1);
            let node = hash_pair(&tree[level_start + i], &tree[level_start + right]);
            tree.push(node);
        }
        level_start += level_len;
        level_len = level_len.div_ceil(2);
    }

    tree
}

/// Root of the tree over `leaves`, or the zero hash when there are none.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    build_merkle_tree(leaves).last().copied().unwrap_or(Hash256::ZERO)
}
