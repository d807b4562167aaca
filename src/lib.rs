//! # json_digest
//!
//! Canonical serialization and cryptographic digests of JSON trees.
//!
//! Two structurally equivalent trees (same keys and values, any key order,
//! any textual spelling of the same number) canonicalize to identical bytes
//! and therefore hash identically.
//!
//! ## Core Concepts
//!
//! - **Canonicalization**: RFC 8785 (JCS) text for any [`Tree`]
//! - **Digests**: a [`Digester`] applied to the canonical UTF-8 bytes
//! - **Merkle hashes**: per-node hashes composed bottom-up, where any subtree
//!   of a [`MerkleTree`] may be replaced by its [`MerkleHash`] without
//!   changing the root
//!
//! ## Example
//!
//! ```ignore
//! use json_digest::{canonicalize, merkle, Algorithm, MerkleTree, NativeDigester, Tree};
//!
//! let tree = Tree::object([("b", 2), ("a", 1)]);
//! assert_eq!(canonicalize(&tree), r#"{"a":1,"b":2}"#);
//!
//! let digester = NativeDigester::new();
//! let root = merkle(&digester, Algorithm::Sha3_256, &MerkleTree::from(tree)).await?;
//! println!("{}", root);
//! ```

pub mod canon;
pub mod codec;
pub mod config;
pub mod digest;
pub mod merkle;
pub mod model;

mod error;

pub use canon::canonicalize;
pub use config::{Config, HashEncoding};
pub use self::digest::{digest, digest_hex, Digester, NativeDigester};
pub use error::{Error, Result};
pub use merkle::{merkle, MerkleHasher};
pub use model::{Algorithm, MerkleHash, MerkleTree, Tree};
