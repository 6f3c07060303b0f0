use super::create_middle_node::create_middle_node;
use crate::merkle_sum_tree::utils::operation_helpers::{log2, next_power_of_two};
use crate::merkle_sum_tree::{MerkleProof, Node, TreeError, UserRecord};

/// Rejects malformed inputs before any hashing happens. A proof of the wrong
/// length or an out-of-range leaf index is an input-validation failure,
/// reported distinctly from "proof does not verify".
pub(crate) fn validate_proof_shape(proof: &MerkleProof) -> Result<(), TreeError> {
    let expected = log2(next_power_of_two(proof.user_count));
    if proof.siblings.len() != expected {
        return Err(TreeError::InvalidProofLength {
            expected,
            actual: proof.siblings.len(),
        });
    }
    if proof.leaf_index >= proof.user_count {
        return Err(TreeError::LeafIndexOutOfRange {
            index: proof.leaf_index,
            user_count: proof.user_count,
        });
    }
    Ok(())
}

/// Recomputes the branch from a leaf to the root. Bit `level` of the leaf
/// index says whether the leaf's lineage is the right child at that level,
/// i.e. whether the proof node joins from the left.
pub(crate) fn fold_branch(
    leaf: Node,
    leaf_index: usize,
    siblings: &[Node],
) -> Result<Node, TreeError> {
    let mut node = leaf;
    for (level, sibling) in siblings.iter().enumerate() {
        node = if leaf_index & (1 << level) != 0 {
            create_middle_node(sibling, &node)?
        } else {
            create_middle_node(&node, sibling)?
        };
    }
    Ok(node)
}

/// Verifies that `record` is committed under the proof's root. Returns
/// `Ok(false)` on any digest or balance mismatch; the aggregate balances are
/// compared structurally, not just the hash, so a verifier also confirms the
/// disclosed sums. A negative amount inside a proof node surfaces the
/// combiner's integrity error.
pub fn verify_proof(record: &UserRecord, proof: &MerkleProof) -> Result<bool, TreeError> {
    validate_proof_shape(proof)?;

    let computed = fold_branch(record.compute_leaf(), proof.leaf_index, &proof.siblings)?;

    Ok(computed.hash == proof.root.hash && computed.balances == proof.root.balances)
}
