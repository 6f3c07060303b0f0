mod build_tree;
mod create_middle_node;
mod create_proof;
mod csv_parser;
mod hash;
mod index_of;
mod operation_helpers;
mod proof_verification;
mod visibility;

pub use build_tree::build_merkle_tree_from_records;
pub use create_middle_node::create_middle_node;
pub use create_proof::create_proof;
pub use csv_parser::parse_csv_to_records;
pub use hash::sha256;
pub use index_of::index_of;
pub use operation_helpers::*;
pub use proof_verification::verify_proof;
pub use visibility::disclosed_nodes;

pub(crate) use proof_verification::fold_branch;
