//! User configuration for the CLI
//!
//! Stored in ~/.config/json-digest/config.json (or the platform equivalent).
//! Every field is optional in the file; missing fields take their defaults.

use crate::model::{Algorithm, MerkleHash};
use crate::{codec, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Text encoding used when printing digests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashEncoding {
    #[default]
    Hex,
    Base85,
}

impl HashEncoding {
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            HashEncoding::Hex => codec::to_hex(bytes),
            HashEncoding::Base85 => codec::base85::encode(bytes),
        }
    }

    pub fn encode_hash(&self, hash: &MerkleHash) -> String {
        self.encode(hash.as_bytes())
    }
}

impl FromStr for HashEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(HashEncoding::Hex),
            "base85" => Ok(HashEncoding::Base85),
            _ => Err(Error::Config(format!("Unknown encoding: {}", s))),
        }
    }
}

impl fmt::Display for HashEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashEncoding::Hex => f.write_str("hex"),
            HashEncoding::Base85 => f.write_str("base85"),
        }
    }
}

/// CLI defaults, overridable per invocation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Algorithm used when none is given on the command line
    pub algorithm: Algorithm,
    /// How digests are printed
    pub encoding: HashEncoding,
    /// Hash sibling subtrees concurrently in `merkle`
    pub concurrent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::Sha256,
            encoding: HashEncoding::Hex,
            concurrent: false,
        }
    }
}

impl Config {
    /// Default config location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("json-digest").join("config.json"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Write to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config dir: {}", e)))?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            algorithm: Algorithm::Sha3_512,
            encoding: HashEncoding::Base85,
            concurrent: true,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"algorithm": "SHA3-256"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.algorithm, Algorithm::Sha3_256);
        assert_eq!(config.encoding, HashEncoding::Hex);
        assert!(!config.concurrent);
    }

    #[test]
    fn test_invalid_algorithm_in_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"algorithm": "CRC32"}"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_encoding() {
        let bytes = [0xd4, 0x1d, 0x8c, 0xd9];
        assert_eq!(HashEncoding::Hex.encode(&bytes), "d41d8cd9");
        assert_eq!(HashEncoding::Base85.encode(&bytes), ")E$i3");
        assert_eq!("BASE85".parse::<HashEncoding>().unwrap(), HashEncoding::Base85);
        assert!("base64".parse::<HashEncoding>().is_err());
    }
}
