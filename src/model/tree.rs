//! In-memory JSON trees

use super::MerkleHash;
use std::collections::BTreeMap;

/// A parsed JSON value
///
/// Object keys are unique; their insertion order carries no meaning because
/// canonicalization sorts them.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Tree {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Tree>),
    Object(BTreeMap<String, Tree>),
}

/// A JSON value in which any subtree may be replaced by its Merkle hash
#[derive(Clone, Debug, Default, PartialEq)]
pub enum MerkleTree {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<MerkleTree>),
    Object(BTreeMap<String, MerkleTree>),
    /// A precomputed hash standing in for the subtree it was computed from
    Hash(MerkleHash),
}

impl Tree {
    /// Build an object from key/value pairs
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Tree>,
        I: IntoIterator<Item = (K, V)>,
    {
        Tree::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from values
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Tree>,
        I: IntoIterator<Item = V>,
    {
        Tree::Array(items.into_iter().map(Into::into).collect())
    }

    /// Short name of the variant, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Tree::Null => "null",
            Tree::Bool(_) => "boolean",
            Tree::Number(_) => "number",
            Tree::String(_) => "string",
            Tree::Array(_) => "array",
            Tree::Object(_) => "object",
        }
    }
}

impl MerkleTree {
    /// Build an object from key/value pairs
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<MerkleTree>,
        I: IntoIterator<Item = (K, V)>,
    {
        MerkleTree::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from values
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<MerkleTree>,
        I: IntoIterator<Item = V>,
    {
        MerkleTree::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MerkleTree::Null => "null",
            MerkleTree::Bool(_) => "boolean",
            MerkleTree::Number(_) => "number",
            MerkleTree::String(_) => "string",
            MerkleTree::Array(_) => "array",
            MerkleTree::Object(_) => "object",
            MerkleTree::Hash(_) => "hash",
        }
    }

    /// Check if this node is a precomputed hash
    pub fn is_hash(&self) -> bool {
        matches!(self, MerkleTree::Hash(_))
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => |$v:ident| $num:expr),* $(,)?) => {
        $(
            impl From<$ty> for Tree {
                fn from($v: $ty) -> Self {
                    Tree::Number($num)
                }
            }

            impl From<$ty> for MerkleTree {
                fn from($v: $ty) -> Self {
                    MerkleTree::Number($num)
                }
            }
        )*
    };
}

impl_from_scalar! {
    f64 => |v| v,
    f32 => |v| v as f64,
    i32 => |v| v as f64,
    i64 => |v| v as f64,
    u32 => |v| v as f64,
    u64 => |v| v as f64,
}

impl From<bool> for Tree {
    fn from(v: bool) -> Self {
        Tree::Bool(v)
    }
}

impl From<&str> for Tree {
    fn from(v: &str) -> Self {
        Tree::String(v.to_string())
    }
}

impl From<String> for Tree {
    fn from(v: String) -> Self {
        Tree::String(v)
    }
}

impl<T: Into<Tree>> From<Option<T>> for Tree {
    fn from(v: Option<T>) -> Self {
        v.map_or(Tree::Null, Into::into)
    }
}

impl<T: Into<Tree>> From<Vec<T>> for Tree {
    fn from(v: Vec<T>) -> Self {
        Tree::array(v)
    }
}

impl<T: Into<Tree>> From<BTreeMap<String, T>> for Tree {
    fn from(v: BTreeMap<String, T>) -> Self {
        Tree::object(v)
    }
}

impl<K: Into<String>, V: Into<Tree>> FromIterator<(K, V)> for Tree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Tree::object(iter)
    }
}

impl From<bool> for MerkleTree {
    fn from(v: bool) -> Self {
        MerkleTree::Bool(v)
    }
}

impl From<&str> for MerkleTree {
    fn from(v: &str) -> Self {
        MerkleTree::String(v.to_string())
    }
}

impl From<String> for MerkleTree {
    fn from(v: String) -> Self {
        MerkleTree::String(v)
    }
}

impl<T: Into<MerkleTree>> From<Option<T>> for MerkleTree {
    fn from(v: Option<T>) -> Self {
        v.map_or(MerkleTree::Null, Into::into)
    }
}

impl<T: Into<MerkleTree>> From<Vec<T>> for MerkleTree {
    fn from(v: Vec<T>) -> Self {
        MerkleTree::array(v)
    }
}

impl<T: Into<MerkleTree>> From<BTreeMap<String, T>> for MerkleTree {
    fn from(v: BTreeMap<String, T>) -> Self {
        MerkleTree::object(v)
    }
}

impl<K: Into<String>, V: Into<MerkleTree>> FromIterator<(K, V)> for MerkleTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MerkleTree::object(iter)
    }
}

impl From<MerkleHash> for MerkleTree {
    fn from(hash: MerkleHash) -> Self {
        MerkleTree::Hash(hash)
    }
}

impl From<Tree> for MerkleTree {
    fn from(tree: Tree) -> Self {
        match tree {
            Tree::Null => MerkleTree::Null,
            Tree::Bool(b) => MerkleTree::Bool(b),
            Tree::Number(n) => MerkleTree::Number(n),
            Tree::String(s) => MerkleTree::String(s),
            Tree::Array(items) => MerkleTree::array(items),
            Tree::Object(map) => MerkleTree::object(map),
        }
    }
}

impl From<serde_json::Value> for Tree {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Tree::Null,
            Value::Bool(b) => Tree::Bool(b),
            // as_f64 only fails under serde_json's arbitrary_precision
            Value::Number(n) => Tree::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Tree::String(s),
            Value::Array(items) => Tree::array(items),
            Value::Object(map) => Tree::object(map),
        }
    }
}

impl From<serde_json::Value> for MerkleTree {
    fn from(value: serde_json::Value) -> Self {
        Tree::from(value).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Algorithm;
    use serde_json::json;

    #[test]
    fn test_from_json_value() {
        let tree = Tree::from(json!({"a": [1, "x", null, true], "b": {}}));
        let expected = Tree::object([
            (
                "a",
                Tree::array([
                    Tree::Number(1.0),
                    Tree::from("x"),
                    Tree::Null,
                    Tree::Bool(true),
                ]),
            ),
            ("b", Tree::Object(BTreeMap::new())),
        ]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let a: Tree = [("x", 1), ("y", 2)].into_iter().collect();
        let b: Tree = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tree_into_merkle_tree() {
        let tree = Tree::object([("k", Tree::array([1, 2]))]);
        let merkle = MerkleTree::from(tree);
        assert_eq!(
            merkle,
            MerkleTree::object([("k", MerkleTree::array([1, 2]))])
        );
    }

    #[test]
    fn test_option_maps_none_to_null() {
        assert_eq!(Tree::from(None::<i32>), Tree::Null);
        assert_eq!(Tree::from(Some("s")), Tree::String("s".into()));
    }

    #[test]
    fn test_hash_leaf() {
        let hash = MerkleHash::new(Algorithm::Sha256, &[0u8; 32]);
        let node = MerkleTree::from(hash);
        assert!(node.is_hash());
        assert_eq!(node.kind(), "hash");
    }
}
