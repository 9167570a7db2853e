use ::base64::engine::general_purpose::STANDARD;
use ::base64::{DecodeError, Engine as _};

use crate::HashError;

const ENCODING: &str = "base-64";

/// Length of the padded base-64 form of `n` bytes: `4 * ceil(n / 3)`.
pub const fn encoded_len(n: usize) -> usize {
    ((4 * n / 3) + 3) & !3
}

/// Encode `bytes` with the standard alphabet and `=` padding.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode canonical, padded base-64.
///
/// Non-canonical padding and non-zero trailing bits are rejected. The
/// caller checks the decoded size against the digest it expects.
pub fn decode(s: &str) -> Result<Vec<u8>, HashError> {
    STANDARD.decode(s).map_err(|err| match err {
        DecodeError::InvalidByte(position, byte) => HashError::InvalidCharacter {
            encoding: ENCODING,
            position,
            character: byte as char,
        },
        _ => HashError::InvalidEncoding {
            encoding: ENCODING,
            hash: s.to_owned(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_match_padded_output() {
        for n in 0..=64usize {
            let bytes = vec![0x5au8; n];
            assert_eq!(encode(&bytes).len(), encoded_len(n), "size {n}");
        }
    }

    #[test]
    fn known_value() {
        assert_eq!(encode(b"abc"), "YWJj");
        assert_eq!(decode("YWJjZA==").unwrap(), b"abcd");
    }

    #[test]
    fn missing_padding_is_rejected() {
        assert!(decode("YWJjZA").is_err());
    }

    #[test]
    fn non_canonical_trailing_bits_are_rejected() {
        // "YWJjZB==" decodes to the same bytes as "YWJjZA==" in lenient decoders.
        assert!(decode("YWJjZB==").is_err());
    }

    #[test]
    fn invalid_character_position() {
        let err = decode("YW!j").unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidCharacter {
                encoding: "base-64",
                position: 2,
                character: '!',
            }
        );
    }
}
