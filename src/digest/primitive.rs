//! Digest primitive trait and the built-in implementation

use crate::model::Algorithm;
use crate::{Error, Result};
use async_trait::async_trait;
use ::digest::Digest;
use std::collections::BTreeSet;

/// A function from bytes to a fixed-length digest, keyed by algorithm
///
/// Implementations can use:
/// - In-process software hashing ([`NativeDigester`])
/// - Hardware or remote crypto services
/// - Restricted sets of algorithms, e.g. for policy enforcement
#[async_trait]
pub trait Digester: Send + Sync {
    /// Digest `data`, failing with [`Error::UnsupportedAlgorithm`] if this
    /// digester does not implement `algorithm`
    async fn digest(&self, algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>>;

    /// Check if the algorithm is implemented
    fn supports(&self, algorithm: Algorithm) -> bool;
}

/// Software digests from RustCrypto and BLAKE3
#[derive(Clone, Debug)]
pub struct NativeDigester {
    enabled: BTreeSet<Algorithm>,
}

impl NativeDigester {
    /// A digester for every [`Algorithm`]
    pub fn new() -> Self {
        NativeDigester {
            enabled: Algorithm::ALL.into_iter().collect(),
        }
    }

    /// A digester limited to the given algorithms
    pub fn with_algorithms(algorithms: &[Algorithm]) -> Self {
        NativeDigester {
            enabled: algorithms.iter().copied().collect(),
        }
    }

    /// Digest synchronously
    pub fn digest_sync(&self, algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>> {
        if !self.supports(algorithm) {
            return Err(Error::UnsupportedAlgorithm(algorithm.to_string()));
        }
        Ok(match algorithm {
            Algorithm::Sha1 => run::<sha1::Sha1>(data),
            Algorithm::Sha256 => run::<sha2::Sha256>(data),
            Algorithm::Sha384 => run::<sha2::Sha384>(data),
            Algorithm::Sha512 => run::<sha2::Sha512>(data),
            Algorithm::Sha3_224 => run::<sha3::Sha3_224>(data),
            Algorithm::Sha3_256 => run::<sha3::Sha3_256>(data),
            Algorithm::Sha3_384 => run::<sha3::Sha3_384>(data),
            Algorithm::Sha3_512 => run::<sha3::Sha3_512>(data),
            Algorithm::Md5 => run::<md5::Md5>(data),
            Algorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        })
    }
}

impl Default for NativeDigester {
    fn default() -> Self {
        Self::new()
    }
}

fn run<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

#[async_trait]
impl Digester for NativeDigester {
    async fn digest(&self, algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>> {
        self.digest_sync(algorithm, data)
    }

    fn supports(&self, algorithm: Algorithm) -> bool {
        self.enabled.contains(&algorithm)
    }
}
