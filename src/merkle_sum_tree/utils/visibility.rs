use super::create_middle_node::create_middle_node;
use super::proof_verification::validate_proof_shape;
use crate::merkle_sum_tree::{MerkleProof, Node, TreeError, UserRecord};

/// Runs the verification fold and records, per level, the freshly combined
/// ancestor followed by the proof node consumed at that level, in production
/// order. The result is exactly the set of intermediate balances this proof
/// discloses to its holder; a privacy-accounting aid, not a cryptographic
/// guarantee.
pub fn disclosed_nodes(record: &UserRecord, proof: &MerkleProof) -> Result<Vec<Node>, TreeError> {
    validate_proof_shape(proof)?;

    let mut node = record.compute_leaf();
    let mut disclosed = Vec::with_capacity(2 * proof.siblings.len());

    for (level, sibling) in proof.siblings.iter().enumerate() {
        node = if proof.leaf_index & (1 << level) != 0 {
            create_middle_node(sibling, &node)?
        } else {
            create_middle_node(&node, sibling)?
        };
        disclosed.push(node.clone());
        disclosed.push(sibling.clone());
    }

    Ok(disclosed)
}
