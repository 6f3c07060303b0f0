use std::path::Path;

use rand::RngCore;

use crate::merkle_sum_tree::utils::{
    build_merkle_tree_from_records, create_proof, disclosed_nodes, index_of, log2,
    parse_csv_to_records, verify_proof,
};
use crate::merkle_sum_tree::{MerkleProof, Node, TreeError, UserRecord};

/// A built Merkle sum tree over one balance snapshot.
///
/// The tree exists only in its built state: the constructor either returns a
/// complete tree or fails, and the value is immutable afterwards, so it can
/// be read by any number of concurrent verifiers. A balance change means
/// discarding the tree and building a fresh one (with fresh salts) from the
/// new snapshot.
#[derive(Debug)]
pub struct MerkleSumTree {
    nodes: Vec<Node>,
    tree_size: usize,
    user_count: usize,
}

impl MerkleSumTree {
    /// Builds the tree from the caller's records. The records are only read;
    /// the caller keeps ownership and hands each user their own record back
    /// for verification.
    pub fn from_records(records: &[UserRecord]) -> Result<Self, TreeError> {
        let nodes = build_merkle_tree_from_records(records)?;
        let tree_size = nodes.len() / 2;

        Ok(MerkleSumTree {
            nodes,
            tree_size,
            user_count: records.len(),
        })
    }

    /// Ingests a snapshot CSV (columns `user_id,balances`) and builds the
    /// tree, drawing per-record salts from `rng`.
    pub fn from_csv<P: AsRef<Path>>(path: P, rng: &mut impl RngCore) -> Result<Self, TreeError> {
        let records = parse_csv_to_records(path, rng)?;
        Self::from_records(&records)
    }

    /// Root commitment: digest plus the coin-wise total of every user's
    /// balances. This pair is what the exchange publishes.
    pub fn root(&self) -> &Node {
        &self.nodes[1]
    }

    pub fn depth(&self) -> usize {
        log2(self.tree_size)
    }

    pub fn tree_size(&self) -> usize {
        self.tree_size
    }

    pub fn user_count(&self) -> usize {
        self.user_count
    }

    /// All leaves, real records first, then `EMPTY` padding.
    pub fn leaves(&self) -> &[Node] {
        &self.nodes[self.tree_size..]
    }

    pub fn index_of(&self, record: &UserRecord) -> Option<usize> {
        index_of(record, self.leaves())
    }

    /// Extracts the independent proof handed to the user at `index`.
    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, TreeError> {
        create_proof(&self.nodes, self.tree_size, self.user_count, index)
    }

    /// Convenience wrapper over the standalone verifier; verification never
    /// needs the tree itself, only the record and the proof.
    pub fn verify_proof(&self, record: &UserRecord, proof: &MerkleProof) -> Result<bool, TreeError> {
        verify_proof(record, proof)
    }

    /// The intermediate nodes a proof disclosed to its holder.
    pub fn disclosed_nodes(
        &self,
        record: &UserRecord,
        proof: &MerkleProof,
    ) -> Result<Vec<Node>, TreeError> {
        disclosed_nodes(record, proof)
    }
}
