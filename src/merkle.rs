//! Merkle hashes of JSON trees
//!
//! Every node is hashed on its own. Scalars hash their canonical JSON text;
//! arrays and objects hash a JSON-like text in which each child is replaced
//! by the base85 text of the child's hash in single quotes:
//!
//! ```text
//! ['<h0>','<h1>']
//! {"author":'<h0>',"title":'<h1>'}
//! ```
//!
//! A [`MerkleTree::Hash`] leaf is taken as is, so replacing any subtree by its
//! hash leaves every ancestor hash unchanged. Hashing a hash is the identity.

use crate::canon::{format_number, quote, sorted_entries};
use crate::digest::Digester;
use crate::model::{Algorithm, MerkleHash, MerkleTree};
use crate::{Error, Result};
use futures::future::{try_join_all, BoxFuture, FutureExt};

/// Computes Merkle hashes with a fixed algorithm
#[derive(Clone, Copy)]
pub struct MerkleHasher<'a> {
    digester: &'a dyn Digester,
    algorithm: Algorithm,
    concurrent: bool,
}

impl<'a> MerkleHasher<'a> {
    /// Create a hasher that visits children one at a time
    pub fn new(digester: &'a dyn Digester, algorithm: Algorithm) -> Self {
        MerkleHasher {
            digester,
            algorithm,
            concurrent: false,
        }
    }

    /// Hash sibling subtrees concurrently
    ///
    /// Results are identical either way; children are always assembled in
    /// their original order.
    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Compute the Merkle root of a tree
    pub async fn hash(&self, tree: &MerkleTree) -> Result<MerkleHash> {
        let root = self.hash_node(tree).await?;
        tracing::debug!(
            algorithm = %self.algorithm,
            kind = tree.kind(),
            root = %root.short(),
            "computed merkle root"
        );
        Ok(root)
    }

    fn hash_node<'t>(&'t self, tree: &'t MerkleTree) -> BoxFuture<'t, Result<MerkleHash>> {
        async move {
            let canon = match tree {
                MerkleTree::Hash(hash) => {
                    if hash.algorithm() != self.algorithm {
                        return Err(Error::AlgorithmMismatch {
                            expected: self.algorithm,
                            found: hash.algorithm(),
                        });
                    }
                    return Ok(hash.clone());
                }
                MerkleTree::Null => "null".to_string(),
                MerkleTree::Bool(b) => b.to_string(),
                MerkleTree::Number(n) => format_number(*n),
                MerkleTree::String(s) => quote(s),
                MerkleTree::Array(items) => {
                    let children: Vec<&MerkleTree> = items.iter().collect();
                    let hashes = self.hash_children(&children).await?;

                    let mut out = String::from("[");
                    for (i, hash) in hashes.iter().enumerate() {
                        if i > 0 {
                            out.push(',');
                        }
                        push_quoted_hash(&mut out, hash);
                    }
                    out.push(']');
                    out
                }
                MerkleTree::Object(map) => {
                    let entries = sorted_entries(map);
                    let children: Vec<&MerkleTree> = entries.iter().map(|(_, v)| *v).collect();
                    let hashes = self.hash_children(&children).await?;

                    let mut out = String::from("{");
                    for (i, ((key, _), hash)) in entries.iter().zip(&hashes).enumerate() {
                        if i > 0 {
                            out.push(',');
                        }
                        out.push_str(&quote(key));
                        out.push(':');
                        push_quoted_hash(&mut out, hash);
                    }
                    out.push('}');
                    out
                }
            };

            let hash =
                MerkleHash::derive_from(self.digester, self.algorithm, canon.as_bytes()).await?;
            tracing::trace!(kind = tree.kind(), hash = %hash.short(), "hashed node");
            Ok(hash)
        }
        .boxed()
    }

    async fn hash_children(&self, children: &[&MerkleTree]) -> Result<Vec<MerkleHash>> {
        if self.concurrent {
            return try_join_all(children.iter().map(|child| self.hash_node(child))).await;
        }

        let mut hashes = Vec::with_capacity(children.len());
        for child in children {
            hashes.push(self.hash_node(child).await?);
        }
        Ok(hashes)
    }
}

fn push_quoted_hash(out: &mut String, hash: &MerkleHash) {
    out.push('\'');
    out.push_str(&hash.base85());
    out.push('\'');
}

/// Compute the Merkle root of a tree, one child at a time
pub async fn merkle(
    digester: &dyn Digester,
    algorithm: Algorithm,
    tree: &MerkleTree,
) -> Result<MerkleHash> {
    MerkleHasher::new(digester, algorithm).hash(tree).await
}
