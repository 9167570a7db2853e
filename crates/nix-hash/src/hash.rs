use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::encoding::{base16, base32, base64};
use crate::{HashAlgorithm, HashError, HashFormat};

/// Size of the largest supported digest (SHA-512).
pub const MAX_HASH_SIZE: usize = 64;

/// A digest of some content under a known algorithm.
///
/// The bytes live inline in a fixed buffer sized for the largest
/// algorithm. Only the first [`len`](Hash::len) bytes are meaningful; the
/// rest are always zero. For ordinary digests `len` is the algorithm's
/// digest length; only [`compress_hash`] produces anything shorter.
#[derive(Clone, Copy)]
pub struct Hash {
    algorithm: HashAlgorithm,
    len: usize,
    bytes: [u8; MAX_HASH_SIZE],
}

impl Hash {
    /// A zero-filled hash for `algorithm`.
    pub const fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            len: algorithm.digest_len(),
            bytes: [0u8; MAX_HASH_SIZE],
        }
    }

    /// The zero SHA-256 hash, a placeholder for digests not yet known.
    pub const fn dummy() -> Self {
        Self::new(HashAlgorithm::Sha256)
    }

    /// Create a hash from raw digest bytes.
    pub fn from_slice(algorithm: HashAlgorithm, bytes: &[u8]) -> Result<Self, HashError> {
        let expected = algorithm.digest_len();
        if bytes.len() != expected {
            return Err(HashError::InvalidHashLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_digest(algorithm, bytes))
    }

    /// Wrap digest output whose size is already known to match `algorithm`.
    pub(crate) fn from_digest(algorithm: HashAlgorithm, digest: &[u8]) -> Self {
        let mut hash = Self::new(algorithm);
        hash.bytes[..hash.len].copy_from_slice(digest);
        hash
    }

    /// Mutable view of the digest bytes, for decoders filling a fresh hash.
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    /// The algorithm that produced this hash.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of digest bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the hash holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the base-16 representation of this hash.
    pub fn base16_len(&self) -> usize {
        base16::encoded_len(self.len)
    }

    /// Length of the base-32 representation of this hash.
    pub fn base32_len(&self) -> usize {
        base32::encoded_len(self.len)
    }

    /// Length of the base-64 representation of this hash.
    pub fn base64_len(&self) -> usize {
        base64::encoded_len(self.len)
    }

    /// Render this hash in `format`.
    ///
    /// With `include_type` the result is prefixed by `<algo>:`. SRI always
    /// carries its type, as `<algo>-`.
    pub fn encode(&self, format: HashFormat, include_type: bool) -> String {
        let mut out = String::new();
        if include_type || format == HashFormat::Sri {
            out.push_str(self.algorithm.name());
            out.push(if format == HashFormat::Sri { '-' } else { ':' });
        }
        match format {
            HashFormat::Base16 => out.push_str(&base16::encode(self.as_bytes())),
            HashFormat::Base32 => out.push_str(&base32::encode(self.as_bytes())),
            HashFormat::Base64 | HashFormat::Sri => {
                out.push_str(&base64::encode(self.as_bytes()))
            }
        }
        out
    }

    /// The SRI form, `<algo>-<base64>`.
    pub fn to_sri(&self) -> String {
        self.encode(HashFormat::Sri, true)
    }

    /// Bare base-16, as git prints revisions.
    pub fn git_rev(&self) -> String {
        self.encode(HashFormat::Base16, false)
    }

    /// The first seven characters of [`git_rev`](Hash::git_rev).
    pub fn git_short_rev(&self) -> String {
        let mut rev = self.git_rev();
        rev.truncate(7);
        rev
    }

    /// Fold this hash into `new_size` bytes. See [`compress_hash`].
    pub fn compress(&self, new_size: usize) -> Result<Hash, HashError> {
        compress_hash(self, new_size)
    }
}

impl PartialEq for Hash {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Hash {}

impl PartialOrd for Hash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Algorithm first, then the digest bytes lexicographically.
impl Ord for Hash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.algorithm
            .cmp(&other.algorithm)
            .then_with(|| self.as_bytes().cmp(other.as_bytes()))
    }
}

impl std::hash::Hash for Hash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.algorithm.hash(state);
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// `<algo>:<base32>`, the canonical text form in the store.
///
/// Only full-length hashes parse back through `FromStr`; the output of
/// [`compress_hash`] is an identifier, not a hash literal.
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode(HashFormat::Base32, true))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_sri())
    }
}

impl FromStr for Hash {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_any_prefixed(s)
    }
}

/// The SRI form. Compressed hashes have no SRI form and fail to serialize.
impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.len != self.algorithm.digest_len() {
            return Err(serde::ser::Error::custom(HashError::InvalidHashLength {
                expected: self.algorithm.digest_len(),
                actual: self.len,
            }));
        }
        serializer.serialize_str(&self.to_sri())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_any_prefixed(&s).map_err(serde::de::Error::custom)
    }
}

/// Fold `hash` into `new_size` bytes by cyclic XOR: output byte `i` is
/// the XOR of every input byte `j` with `j % new_size == i`.
///
/// The result keeps the input's algorithm tag even though its length no
/// longer matches it. It is an identifier, not a cryptographic digest.
pub fn compress_hash(hash: &Hash, new_size: usize) -> Result<Hash, HashError> {
    if new_size == 0 || new_size > MAX_HASH_SIZE {
        return Err(HashError::InvalidCompressSize(new_size));
    }
    let mut out = Hash {
        algorithm: hash.algorithm,
        len: new_size,
        bytes: [0u8; MAX_HASH_SIZE],
    };
    for (i, &b) in hash.as_bytes().iter().enumerate() {
        out.bytes[i % new_size] ^= b;
    }
    Ok(out)
}

/// Parse `s` like [`Hash::parse_any`], except that an empty string is the
/// zero hash of `algorithm`.
pub fn new_hash_allow_empty(s: &str, algorithm: Option<HashAlgorithm>) -> Result<Hash, HashError> {
    if !s.is_empty() {
        return Hash::parse_any(s, algorithm);
    }
    let algorithm = algorithm.ok_or(HashError::EmptyWithoutType)?;
    let hash = Hash::new(algorithm);
    tracing::warn!(hash = %hash.to_sri(), "found empty hash, assuming zero hash");
    Ok(hash)
}

/// Bare base-16 for MD5, bare base-32 for everything else.
pub fn print_hash16_or32(hash: &Hash) -> String {
    let format = if hash.algorithm == HashAlgorithm::Md5 {
        HashFormat::Base16
    } else {
        HashFormat::Base32
    };
    hash.encode(format, false)
}
