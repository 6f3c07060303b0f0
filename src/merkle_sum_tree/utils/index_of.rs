use crate::merkle_sum_tree::{Node, UserRecord};

/// Finds the leaf slot holding `record`'s commitment, by recomputing its
/// leaf hash and scanning the leaf level.
pub fn index_of(record: &UserRecord, leaves: &[Node]) -> Option<usize> {
    let leaf_hash = record.compute_leaf().hash;

    leaves.iter().position(|node| node.hash == leaf_hash)
}
