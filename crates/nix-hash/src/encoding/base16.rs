use crate::HashError;

const ENCODING: &str = "base-16";

/// Lookup table: ASCII byte → nibble value (255 = invalid).
const DECODE: [u8; 256] = {
    let mut table = [255u8; 256];
    let mut i = 0u8;
    loop {
        match i {
            b'0'..=b'9' => table[i as usize] = i - b'0',
            b'a'..=b'f' => table[i as usize] = i - b'a' + 10,
            b'A'..=b'F' => table[i as usize] = i - b'A' + 10,
            _ => {}
        }
        if i == 255 {
            break;
        }
        i += 1;
    }
    table
};

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Length of the base-16 form of `n` bytes.
pub const fn encoded_len(n: usize) -> usize {
    n * 2
}

/// Encode `bytes` as lowercase hexadecimal.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    for &b in bytes {
        out.push(ALPHABET[(b >> 4) as usize] as char);
        out.push(ALPHABET[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode `s` into `buf`. `s` must be exactly `buf.len() * 2` characters.
///
/// Upper-case digits are accepted.
pub fn decode(s: &str, buf: &mut [u8]) -> Result<(), HashError> {
    let hex = s.as_bytes();
    if hex.len() != encoded_len(buf.len()) {
        return Err(HashError::InvalidEncodedLength {
            encoding: ENCODING,
            expected: encoded_len(buf.len()),
            actual: hex.len(),
        });
    }
    for (i, out) in buf.iter_mut().enumerate() {
        let hi = nibble(hex, i * 2)?;
        let lo = nibble(hex, i * 2 + 1)?;
        *out = (hi << 4) | lo;
    }
    Ok(())
}

fn nibble(hex: &[u8], position: usize) -> Result<u8, HashError> {
    match DECODE[hex[position] as usize] {
        255 => Err(HashError::InvalidCharacter {
            encoding: ENCODING,
            position,
            character: hex[position] as char,
        }),
        v => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_lowercase() {
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0xff]), "deadbeef00ff");
    }

    #[test]
    fn decode_mixed_case() {
        let mut buf = [0u8; 4];
        decode("DeAdBeEf", &mut buf).unwrap();
        assert_eq!(buf, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_invalid_char() {
        let mut buf = [0u8; 4];
        let err = decode("deadgoof", &mut buf).unwrap_err();
        assert_eq!(
            err,
            HashError::InvalidCharacter {
                encoding: "base-16",
                position: 4,
                character: 'g',
            }
        );
    }

    #[test]
    fn decode_wrong_length() {
        let mut buf = [0u8; 4];
        let err = decode("abc", &mut buf).unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidEncodedLength { expected: 8, actual: 3, .. }
        ));
    }

    #[test]
    fn all_byte_values_roundtrip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let hex = encode(&bytes);
        let mut decoded = vec![0u8; bytes.len()];
        decode(&hex, &mut decoded).unwrap();
        assert_eq!(decoded, bytes);
    }
}
