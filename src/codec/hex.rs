//! Lowercase hexadecimal encoding

use crate::Result;

/// Encode bytes as a lowercase hex string (two digits per byte)
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string, accepting either case
///
/// Fails if the input has odd length or contains a non-hex character.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[]), "");
        assert_eq!(to_hex(&[0x12, 0x34, 0x56, 0x78]), "12345678");
        assert_eq!(to_hex(&[0xfe, 0xdc, 0xba, 0x00]), "fedcba00");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(from_hex("12345678").unwrap(), vec![0x12, 0x34, 0x56, 0x78]);
        assert_eq!(from_hex("fedcba00").unwrap(), vec![0xfe, 0xdc, 0xba, 0x00]);
        assert_eq!(from_hex("ABCDEF00").unwrap(), vec![0xab, 0xcd, 0xef, 0x00]);
    }

    #[test]
    fn test_from_hex_odd_length() {
        for input in ["a", "abc"] {
            assert!(matches!(
                from_hex(input),
                Err(Error::InvalidHex(hex::FromHexError::OddLength))
            ));
        }
    }

    #[test]
    fn test_from_hex_invalid_char() {
        assert!(matches!(
            from_hex("zz"),
            Err(Error::InvalidHex(
                hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }
            ))
        ));
    }

    #[test]
    fn test_hex_lowercases_on_reencode() {
        let bytes = from_hex("DeadBEEF").unwrap();
        assert_eq!(to_hex(&bytes), "deadbeef");
    }
}
