use std::fmt;
use std::str::FromStr;

use crate::encoding::{base16, base32, base64};
use crate::HashError;

/// Supported digest algorithms.
///
/// The set is closed. Declaration order is the sort order used by
/// [`Hash`](crate::Hash).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HashAlgorithm {
    /// MD5 (16 bytes / 128 bits).
    Md5,
    /// SHA-1 (20 bytes / 160 bits).
    Sha1,
    /// SHA-256 (default, 32 bytes / 256 bits).
    #[default]
    Sha256,
    /// SHA-512 (64 bytes / 512 bits).
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, shortest digest first.
    pub const ALL: [HashAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Length of the digest in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Length of the base-16 representation.
    pub const fn base16_len(&self) -> usize {
        base16::encoded_len(self.digest_len())
    }

    /// Length of the base-32 representation.
    pub const fn base32_len(&self) -> usize {
        base32::encoded_len(self.digest_len())
    }

    /// Length of the base-64 representation, padding included.
    pub const fn base64_len(&self) -> usize {
        base64::encoded_len(self.digest_len())
    }

    /// The canonical lowercase name, as used in hash literals.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Look up an algorithm by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "md5" => Some(Self::Md5),
            "sha1" => Some(Self::Sha1),
            "sha256" => Some(Self::Sha256),
            "sha512" => Some(Self::Sha512),
            _ => None,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hash_type(s)
    }
}

/// Parse an algorithm name, failing on anything but a canonical name.
pub fn parse_hash_type(s: &str) -> Result<HashAlgorithm, HashError> {
    HashAlgorithm::from_name(s).ok_or_else(|| HashError::UnknownAlgorithm(s.to_owned()))
}

/// Like [`parse_hash_type`], but returns `None` instead of failing.
pub fn parse_hash_type_opt(s: &str) -> Option<HashAlgorithm> {
    HashAlgorithm::from_name(s)
}

/// The reverse of [`parse_hash_type`].
pub fn print_hash_type(algorithm: HashAlgorithm) -> &'static str {
    algorithm.name()
}
