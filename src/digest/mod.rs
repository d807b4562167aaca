//! Digests of canonical JSON
//!
//! Equivalent trees always produce the same digest, regardless of object key
//! order or how numbers were written in the source text.

mod primitive;

pub use primitive::{Digester, NativeDigester};

use crate::canon::canonicalize_bytes;
use crate::codec::to_hex;
use crate::model::{Algorithm, Tree};
use crate::Result;

/// Digest the canonical form of a tree
///
/// Unsupported algorithms are reported by the digester and passed through
/// unchanged.
pub async fn digest(
    digester: &dyn Digester,
    algorithm: Algorithm,
    tree: &Tree,
) -> Result<Vec<u8>> {
    let canon = canonicalize_bytes(tree);
    tracing::debug!(
        %algorithm,
        kind = tree.kind(),
        len = canon.len(),
        "digesting canonical json"
    );
    digester.digest(algorithm, &canon).await
}

/// Digest the canonical form of a tree as lowercase hex
pub async fn digest_hex(
    digester: &dyn Digester,
    algorithm: Algorithm,
    tree: &Tree,
) -> Result<String> {
    Ok(to_hex(&digest(digester, algorithm, tree).await?))
}
