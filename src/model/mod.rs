//! Core data model types for json_digest

mod algorithm;
mod merkle_hash;
mod tree;

pub use algorithm::Algorithm;
pub use merkle_hash::MerkleHash;
pub use tree::{MerkleTree, Tree};
