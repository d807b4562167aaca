//! Error types for json_digest

use crate::model::Algorithm;
use thiserror::Error;

/// Result type alias for json_digest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in json_digest operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid base85 string: {0}")]
    InvalidBase85(String),

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Comparing hashes of different algorithms is a programming mistake,
    /// not an ordinary inequality.
    #[error("Cannot compare merkle hashes with different algorithms: {left} and {right}")]
    IncomparableAlgorithms { left: Algorithm, right: Algorithm },

    #[error("Cannot compare merkle hashes with different sizes: {left} and {right} bytes")]
    IncomparableLengths { left: usize, right: usize },

    #[error("Hash algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch { expected: Algorithm, found: Algorithm },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
