//! Base85 encoding with the RFC 1924 alphabet
//!
//! Bytes are taken in big-endian groups of four and written as five base-85
//! digits. A short final group is zero-padded before encoding and the output
//! is cut back by the number of padding bytes, so no delimiter or padding
//! character ever appears in the text.

use crate::{Error, Result};

const ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

/// Encode bytes as RFC 1924 base85 text
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(4) * 5);
    for chunk in bytes.chunks(4) {
        let mut group = [0u8; 4];
        group[..chunk.len()].copy_from_slice(chunk);
        let mut value = u32::from_be_bytes(group);

        let mut digits = [0u8; 5];
        for digit in digits.iter_mut().rev() {
            *digit = ALPHABET[(value % 85) as usize];
            value /= 85;
        }
        out.extend(digits[..chunk.len() + 1].iter().map(|&b| b as char));
    }
    out
}

/// Decode RFC 1924 base85 text produced by [`encode`]
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len() / 5 * 4 + 4);
    for (index, chunk) in text.as_bytes().chunks(5).enumerate() {
        if chunk.len() == 1 {
            return Err(Error::InvalidBase85(
                "final group must have at least two characters".into(),
            ));
        }

        // Missing digits of a short group are filled with the highest digit,
        // which rounds the value up to the truncated bytes.
        let mut value: u64 = 0;
        for i in 0..5 {
            let digit = match chunk.get(i) {
                Some(&c) => digit_value(c).ok_or_else(|| {
                    Error::InvalidBase85(format!(
                        "invalid character {:?} at position {}",
                        c as char,
                        index * 5 + i
                    ))
                })?,
                None => 84,
            };
            value = value * 85 + digit as u64;
        }
        if value > u32::MAX as u64 {
            return Err(Error::InvalidBase85(format!(
                "group {} overflows 32 bits",
                index
            )));
        }

        let group = (value as u32).to_be_bytes();
        out.extend_from_slice(&group[..chunk.len() - 1]);
    }
    Ok(out)
}

fn digit_value(c: u8) -> Option<u8> {
    ALPHABET.iter().position(|&a| a == c).map(|p| p as u8)
}
