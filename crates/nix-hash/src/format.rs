use std::fmt;
use std::str::FromStr;

use crate::{HashAlgorithm, HashError};

/// Text encodings of a [`Hash`](crate::Hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFormat {
    /// Standard RFC 4648 base-64 with padding.
    Base64,
    /// The storage-specific base-32 (see [`crate::encoding::base32`]).
    Base32,
    /// Lowercase hexadecimal.
    Base16,
    /// `<algo>-<base64>`, the Subresource Integrity form.
    Sri,
}

impl HashFormat {
    /// Infer the encoding of an unprefixed, non-SRI digest from its length.
    ///
    /// Exactly one of the base-16, base-32 and base-64 lengths for
    /// `algorithm` must equal `len`; otherwise the format is unknown.
    pub fn from_encoded_len(algorithm: HashAlgorithm, len: usize) -> Option<Self> {
        let candidates = [
            (Self::Base16, algorithm.base16_len()),
            (Self::Base32, algorithm.base32_len()),
            (Self::Base64, algorithm.base64_len()),
        ];
        let mut matching = candidates
            .into_iter()
            .filter(|&(_, expected)| expected == len)
            .map(|(format, _)| format);
        match (matching.next(), matching.next()) {
            (Some(format), None) => Some(format),
            _ => None,
        }
    }

    /// The canonical name of this format.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::Base32 => "base32",
            Self::Base16 => "base16",
            Self::Sri => "sri",
        }
    }
}

impl fmt::Display for HashFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashFormat {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hash_format(s)
    }
}

/// Parse a format name: `base64`, `base32`, `base16` (or `hex`), `sri`.
pub fn parse_hash_format(name: &str) -> Result<HashFormat, HashError> {
    parse_hash_format_opt(name).ok_or_else(|| HashError::UnknownFormat(name.to_owned()))
}

/// Like [`parse_hash_format`], but returns `None` instead of failing.
pub fn parse_hash_format_opt(name: &str) -> Option<HashFormat> {
    match name {
        "base64" => Some(HashFormat::Base64),
        "base32" => Some(HashFormat::Base32),
        "base16" | "hex" => Some(HashFormat::Base16),
        "sri" => Some(HashFormat::Sri),
        _ => None,
    }
}

/// The reverse of [`parse_hash_format`].
pub fn print_hash_format(format: HashFormat) -> &'static str {
    format.name()
}
