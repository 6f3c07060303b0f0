use serde::Serialize;

use crate::merkle_sum_tree::asset::{combine_same_coin, first_negative, render_balances};
use crate::merkle_sum_tree::utils::sha256;
use crate::merkle_sum_tree::{Node, TreeError};

/// Canonical internal-node preimage; field order is the alphabetical key
/// order of the serialized object.
#[derive(Serialize)]
struct NodePreimage {
    #[serde(rename = "L_balance")]
    l_balance: String,
    #[serde(rename = "L_hash")]
    l_hash: String,
    #[serde(rename = "R_balance")]
    r_balance: String,
    #[serde(rename = "R_hash")]
    r_hash: String,
}

/// Combines two children into their parent node. A negative amount in either
/// child means the ledger below is corrupted or adversarial; the error
/// aborts the whole build rather than producing a root over bad data.
///
/// Verification calls this same function, so the re-derived path matches the
/// build byte-for-byte.
pub fn create_middle_node(child_l: &Node, child_r: &Node) -> Result<Node, TreeError> {
    if let Some(asset) = first_negative(&child_l.balances).or(first_negative(&child_r.balances)) {
        return Err(TreeError::CorruptedBalance(asset.coin.clone()));
    }

    let preimage = NodePreimage {
        l_balance: render_balances(&child_l.balances),
        l_hash: hex::encode(child_l.hash),
        r_balance: render_balances(&child_r.balances),
        r_hash: hex::encode(child_r.hash),
    };
    let bytes = serde_json::to_vec(&preimage).expect("node preimage serialization is infallible");

    let mut balances = child_l.balances.clone();
    balances.extend_from_slice(&child_r.balances);

    Ok(Node {
        hash: sha256(&bytes),
        balances: combine_same_coin(balances),
    })
}
