//! Text encodings for digest bytes

pub mod base85;
pub mod hex;

pub use self::hex::{from_hex, to_hex};
