//! The storage-specific base-32 encoding.
//!
//! This is not RFC 4648. The alphabet drops `e`, `o`, `t` and `u`, and the
//! digest is read as one little-endian bit string: symbol `n` holds bits
//! `5n..5n+5`, and symbols are written from the highest `n` down to 0.
//! The alphabet and bit order are fixed by every identifier already
//! persisted with it.

use crate::HashError;

const ENCODING: &str = "base-32";

/// The 32 symbols, in value order.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdfghijklmnpqrsvwxyz";

const DECODE: [u8; 256] = {
    let mut table = [255u8; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Length of the base-32 form of `n` bytes: `ceil(8n / 5)`.
pub const fn encoded_len(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        (n * 8 - 1) / 5 + 1
    }
}

/// Encode `bytes`.
pub fn encode(bytes: &[u8]) -> String {
    let len = encoded_len(bytes.len());
    let mut out = String::with_capacity(len);
    for n in (0..len).rev() {
        let bit = n * 5;
        let i = bit / 8;
        let j = bit % 8;
        let mut c = u16::from(bytes[i]) >> j;
        if i + 1 < bytes.len() {
            c |= u16::from(bytes[i + 1]) << (8 - j);
        }
        out.push(ALPHABET[(c & 0x1f) as usize] as char);
    }
    out
}

/// Decode `s` into `buf`, which must be exactly the digest size.
///
/// Fails if the most significant symbol carries bits beyond `buf.len()`
/// bytes, so every accepted string has exactly one decoding.
pub fn decode(s: &str, buf: &mut [u8]) -> Result<(), HashError> {
    let input = s.as_bytes();
    if input.len() != encoded_len(buf.len()) {
        return Err(HashError::InvalidEncodedLength {
            encoding: ENCODING,
            expected: encoded_len(buf.len()),
            actual: input.len(),
        });
    }

    buf.fill(0);
    for (position, &ch) in input.iter().enumerate() {
        let digit = DECODE[ch as usize];
        if digit == 255 {
            return Err(HashError::InvalidCharacter {
                encoding: ENCODING,
                position,
                character: ch as char,
            });
        }

        let bit = (input.len() - position - 1) * 5;
        let i = bit / 8;
        let j = bit % 8;
        let wide = u16::from(digit) << j;
        buf[i] |= wide as u8;
        let carry = (wide >> 8) as u8;
        if i + 1 < buf.len() {
            buf[i + 1] |= carry;
        } else if carry != 0 {
            return Err(HashError::InvalidEncoding {
                encoding: ENCODING,
                hash: s.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_pinned() {
        assert_eq!(ALPHABET, b"0123456789abcdfghijklmnpqrsvwxyz");
        for banned in [b'e', b'o', b't', b'u'] {
            assert!(!ALPHABET.contains(&banned));
        }
    }

    #[test]
    fn lengths() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(1), 2);
        assert_eq!(encoded_len(16), 26);
        assert_eq!(encoded_len(20), 32);
        assert_eq!(encoded_len(32), 52);
        assert_eq!(encoded_len(64), 103);
    }

    #[test]
    fn single_byte() {
        // 0x1f: low five bits in the last symbol, the remaining three in the first.
        assert_eq!(encode(&[0x1f]), "0z");
        assert_eq!(encode(&[0xff]), "7z");
        let mut buf = [0u8; 1];
        decode("7z", &mut buf).unwrap();
        assert_eq!(buf, [0xff]);
    }

    #[test]
    fn overflowing_leading_symbol_is_rejected() {
        // One byte only has 3 bits for the leading symbol; '8' needs 4.
        let mut buf = [0u8; 1];
        let err = decode("80", &mut buf).unwrap_err();
        assert!(matches!(err, HashError::InvalidEncoding { .. }));
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        let mut buf = [0u8; 1];
        let err = decode("0e", &mut buf).unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidCharacter {
                encoding: "base-32",
                position: 1,
                character: 'e',
            }
        );
        assert!(decode("0Z", &mut buf).is_err());
    }

    #[test]
    fn decode_clears_buffer() {
        let mut buf = [0xaau8; 2];
        decode(&encode(&[0, 0]), &mut buf).unwrap();
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn all_sizes_roundtrip() {
        for n in 1..=64usize {
            let bytes: Vec<u8> = (0..n).map(|i| (i * 37 + 11) as u8).collect();
            let s = encode(&bytes);
            assert_eq!(s.len(), encoded_len(n));
            let mut decoded = vec![0u8; n];
            decode(&s, &mut decoded).unwrap();
            assert_eq!(decoded, bytes, "size {n}");
        }
    }
}
