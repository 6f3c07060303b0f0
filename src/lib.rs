//! Merkle sum tree for exchange proof-of-solvency commitments.
//!
//! An exchange builds a tree from a snapshot of per-user balances; every
//! internal node carries a SHA-256 digest together with the coin-wise sum of
//! all balances beneath it. Each user receives the sibling path for their
//! leaf and can recompute the published root, confirming both inclusion and
//! that no aggregated balance on the path is negative.

pub mod merkle_sum_tree;

pub use merkle_sum_tree::{
    AssetBalance, MerkleProof, MerkleSumTree, Node, TreeError, UserRecord,
};
