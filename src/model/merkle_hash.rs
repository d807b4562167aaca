//! Algorithm-tagged digest value

use super::Algorithm;
use crate::codec::{base85, from_hex, to_hex};
use crate::digest::Digester;
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A digest produced by a specific algorithm
///
/// The bytes are owned exclusively by the value: construction from a slice
/// copies it, and [`MerkleHash::to_bytes`] hands out a copy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MerkleHash {
    algorithm: Algorithm,
    bytes: Box<[u8]>,
}

impl MerkleHash {
    /// Create a hash from raw digest bytes
    pub fn new(algorithm: Algorithm, bytes: &[u8]) -> Self {
        MerkleHash {
            algorithm,
            bytes: bytes.into(),
        }
    }

    /// Take ownership of a freshly computed digest buffer
    pub(crate) fn from_vec(algorithm: Algorithm, bytes: Vec<u8>) -> Self {
        MerkleHash {
            algorithm,
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Digest arbitrary bytes
    pub async fn derive_from(
        digester: &dyn Digester,
        algorithm: Algorithm,
        data: &[u8],
    ) -> Result<Self> {
        let digest = digester.digest(algorithm, data).await?;
        Ok(MerkleHash::from_vec(algorithm, digest))
    }

    /// Parse from a hex string
    pub fn from_hex(algorithm: Algorithm, hex: &str) -> Result<Self> {
        Ok(MerkleHash::from_vec(algorithm, from_hex(hex)?))
    }

    /// Parse from RFC 1924 base85 text
    pub fn from_base85(algorithm: Algorithm, text: &str) -> Result<Self> {
        Ok(MerkleHash::from_vec(algorithm, base85::decode(text)?))
    }

    /// The algorithm that produced this digest
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Digest length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy the raw bytes out
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Lowercase hex representation
    pub fn hex(&self) -> String {
        to_hex(&self.bytes)
    }

    /// RFC 1924 base85 representation, without delimiters or padding
    pub fn base85(&self) -> String {
        base85::encode(&self.bytes)
    }

    /// First 7 hex digits, for logs
    pub fn short(&self) -> String {
        self.hex().chars().take(7).collect()
    }

    /// Byte-lexicographic comparison
    ///
    /// Hashes of different algorithms or lengths have no meaningful order and
    /// yield an error rather than an arbitrary answer.
    pub fn compare_to(&self, other: &MerkleHash) -> Result<Ordering> {
        if self.algorithm != other.algorithm {
            return Err(Error::IncomparableAlgorithms {
                left: self.algorithm,
                right: other.algorithm,
            });
        }
        if self.bytes.len() != other.bytes.len() {
            return Err(Error::IncomparableLengths {
                left: self.bytes.len(),
                right: other.bytes.len(),
            });
        }
        Ok(self.bytes.cmp(&other.bytes))
    }
}

impl PartialOrd for MerkleHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl fmt::Display for MerkleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.hex())
    }
}

impl fmt::Debug for MerkleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MerkleHash({})", self)
    }
}

impl FromStr for MerkleHash {
    type Err = Error;

    /// Parse the `Display` form, e.g. `SHA-256 a7ffc6f8...`
    fn from_str(s: &str) -> Result<Self> {
        let (algorithm, hex) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| Error::InvalidHash(format!("expected \"<algorithm> <hex>\": {}", s)))?;
        MerkleHash::from_hex(algorithm.parse()?, hex.trim())
    }
}

impl AsRef<[u8]> for MerkleHash {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Serialize for MerkleHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MerkleHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
