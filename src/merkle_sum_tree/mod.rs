mod asset;
mod entry;
mod error;
mod mst;
mod utils;

/// A tree node, leaf or internal: a 32-byte digest plus the canonical
/// balance list aggregated over everything beneath it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub hash: [u8; 32],
    pub balances: Vec<AssetBalance>,
}

impl Node {
    /// Padding sentinel: zero digest, no balances. Never produced by real
    /// data.
    pub fn empty() -> Self {
        Node {
            hash: [0u8; 32],
            balances: Vec::new(),
        }
    }
}

/// An independent copy of one leaf's sibling path, together with everything
/// a holder needs to re-derive the root: their leaf index, the user count at
/// publication time, and the published root itself. No back-reference to the
/// tree.
#[derive(Clone, Debug)]
pub struct MerkleProof {
    pub root: Node,
    pub leaf_index: usize,
    pub user_count: usize,
    pub siblings: Vec<Node>,
}

pub use asset::{combine_same_coin, is_all_non_negative, parse_balances, AssetBalance};
pub use entry::UserRecord;
pub use error::TreeError;
pub use mst::MerkleSumTree;
pub use utils::{create_middle_node, disclosed_nodes, parse_csv_to_records, verify_proof};
