//! Hash literal parsing.
//!
//! A literal is `<algo>:<payload>` or the SRI form `<algo>-<base64>`. A
//! prefixed payload may be base-16, base-32 or base-64; which one is
//! decided by its length alone, since the three lengths differ for every
//! supported digest size.

use crate::encoding::{base16, base32, base64};
use crate::{parse_hash_type, Hash, HashAlgorithm, HashError, HashFormat};

/// An algorithm designator found at the start of a literal.
struct TypePrefix<'a> {
    algorithm: HashAlgorithm,
    is_sri: bool,
    rest: &'a str,
}

/// Split off `<algo>:` or, failing that, `<algo>-`.
///
/// No separator means no designator. A separator after an unknown name
/// is an error rather than a bare payload, because no encoding uses
/// either character.
fn split_type_prefix(s: &str) -> Result<Option<TypePrefix<'_>>, HashError> {
    let (name, rest, is_sri) = if let Some((name, rest)) = s.split_once(':') {
        (name, rest, false)
    } else if let Some((name, rest)) = s.split_once('-') {
        (name, rest, true)
    } else {
        return Ok(None);
    };
    Ok(Some(TypePrefix {
        algorithm: parse_hash_type(name)?,
        is_sri,
        rest,
    }))
}

impl Hash {
    /// Parse `[<algo>:]<base16|base32|base64>` or `<algo>-<base64>`.
    ///
    /// The algorithm comes from the literal, from `algorithm`, or both; when
    /// both are present they must agree.
    pub fn parse_any(s: &str, algorithm: Option<HashAlgorithm>) -> Result<Self, HashError> {
        match (split_type_prefix(s)?, algorithm) {
            (Some(prefix), Some(expected)) if prefix.algorithm != expected => {
                Err(HashError::TypeMismatch {
                    hash: s.to_owned(),
                    expected,
                    actual: prefix.algorithm,
                })
            }
            (Some(prefix), _) => Self::decode_payload(prefix.rest, prefix.algorithm, prefix.is_sri),
            (None, Some(algorithm)) => Self::decode_payload(s, algorithm, false),
            (None, None) => Err(HashError::MissingType(s.to_owned())),
        }
    }

    /// Like [`parse_any`](Hash::parse_any), but the literal itself must name
    /// the algorithm.
    pub fn parse_any_prefixed(s: &str) -> Result<Self, HashError> {
        match split_type_prefix(s)? {
            Some(prefix) => Self::decode_payload(prefix.rest, prefix.algorithm, prefix.is_sri),
            None => Err(HashError::MissingTypePrefix(s.to_owned())),
        }
    }

    /// Parse a bare base-16, base-32 or base-64 payload for `algorithm`.
    pub fn parse_non_sri_unprefixed(s: &str, algorithm: HashAlgorithm) -> Result<Self, HashError> {
        Self::decode_payload(s, algorithm, false)
    }

    /// Parse the SRI form `<algo>-<base64>`.
    pub fn parse_sri(s: &str) -> Result<Self, HashError> {
        let (name, rest) = s
            .split_once('-')
            .ok_or_else(|| HashError::NotSri(s.to_owned()))?;
        Self::decode_payload(rest, parse_hash_type(name)?, true)
    }

    /// Decode a payload whose algorithm is already known. SRI payloads are
    /// always base-64; others are identified by length.
    fn decode_payload(rest: &str, algorithm: HashAlgorithm, is_sri: bool) -> Result<Self, HashError> {
        let format = if is_sri {
            HashFormat::Sri
        } else {
            HashFormat::from_encoded_len(algorithm, rest.len()).ok_or_else(|| {
                HashError::WrongLength {
                    hash: rest.to_owned(),
                    algorithm,
                }
            })?
        };

        let mut hash = Hash::new(algorithm);
        match format {
            HashFormat::Base16 => base16::decode(rest, hash.bytes_mut())?,
            HashFormat::Base32 => base32::decode(rest, hash.bytes_mut())?,
            HashFormat::Base64 | HashFormat::Sri => {
                let decoded = base64::decode(rest)?;
                if decoded.len() != algorithm.digest_len() {
                    return Err(HashError::InvalidEncoding {
                        encoding: if is_sri { "SRI" } else { "base-64" },
                        hash: rest.to_owned(),
                    });
                }
                hash.bytes_mut().copy_from_slice(&decoded);
            }
        }
        Ok(hash)
    }
}
