use crate::merkle_sum_tree::utils::operation_helpers::log2;
use crate::merkle_sum_tree::{MerkleProof, Node, TreeError};

/// Extracts the sibling path for a real leaf: one node per level from the
/// leaf up to, but excluding, the root. The sibling at each level is found
/// by flipping the lowest unconsumed bit of the leaf's absolute index.
pub fn create_proof(
    tree: &[Node],
    tree_size: usize,
    user_count: usize,
    index: usize,
) -> Result<MerkleProof, TreeError> {
    if index >= user_count {
        return Err(TreeError::LeafIndexOutOfRange { index, user_count });
    }

    let branch_length = log2(tree_size);
    let node_index = tree_size + index;

    let siblings = (0..branch_length)
        .map(|level| tree[(node_index >> level) ^ 1].clone())
        .collect();

    Ok(MerkleProof {
        root: tree[1].clone(),
        leaf_index: index,
        user_count,
        siblings,
    })
}
