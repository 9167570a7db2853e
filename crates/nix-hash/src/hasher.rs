//! The per-algorithm digest context behind [`HashSink`](crate::HashSink).

use digest::Digest;

use crate::{Hash, HashAlgorithm};

#[derive(Clone)]
enum HasherInner {
    Md5(md5::Md5),
    Sha1(sha1::Sha1),
    Sha256(sha2::Sha256),
    Sha512(sha2::Sha512),
}

/// An in-progress digest computation.
///
/// Cloning produces an independent continuation: updates to the clone
/// never affect the original, which is how a running computation can be
/// finalized early without disturbing it.
#[derive(Clone)]
pub struct Hasher {
    inner: HasherInner,
}

impl Hasher {
    /// Create a fresh context for the given algorithm.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let inner = match algorithm {
            HashAlgorithm::Md5 => HasherInner::Md5(md5::Md5::new()),
            HashAlgorithm::Sha1 => HasherInner::Sha1(sha1::Sha1::new()),
            HashAlgorithm::Sha256 => HasherInner::Sha256(sha2::Sha256::new()),
            HashAlgorithm::Sha512 => HasherInner::Sha512(sha2::Sha512::new()),
        };
        Self { inner }
    }

    /// The algorithm this context computes.
    pub fn algorithm(&self) -> HashAlgorithm {
        match self.inner {
            HasherInner::Md5(_) => HashAlgorithm::Md5,
            HasherInner::Sha1(_) => HashAlgorithm::Sha1,
            HasherInner::Sha256(_) => HashAlgorithm::Sha256,
            HasherInner::Sha512(_) => HashAlgorithm::Sha512,
        }
    }

    /// Feed data into the context.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            HasherInner::Md5(h) => h.update(data),
            HasherInner::Sha1(h) => h.update(data),
            HasherInner::Sha256(h) => h.update(data),
            HasherInner::Sha512(h) => h.update(data),
        }
    }

    /// Finalize into a [`Hash`].
    pub fn finalize(self) -> Hash {
        let algorithm = self.algorithm();
        match self.inner {
            HasherInner::Md5(h) => Hash::from_digest(algorithm, &h.finalize()),
            HasherInner::Sha1(h) => Hash::from_digest(algorithm, &h.finalize()),
            HasherInner::Sha256(h) => Hash::from_digest(algorithm, &h.finalize()),
            HasherInner::Sha512(h) => Hash::from_digest(algorithm, &h.finalize()),
        }
    }

    /// Convenience: hash data in one call.
    pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Hash {
        let mut h = Self::new(algorithm);
        h.update(data);
        h.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_digests() {
        let cases = [
            (HashAlgorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e"),
            (HashAlgorithm::Sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            (
                HashAlgorithm::Sha256,
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
        ];
        for (algo, hex) in cases {
            let hash = Hasher::digest(algo, b"");
            assert_eq!(hash.algorithm(), algo);
            assert_eq!(crate::encoding::base16::encode(hash.as_bytes()), hex);
        }
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Hasher::new(HashAlgorithm::Sha256);
        original.update(b"abc");

        let mut fork = original.clone();
        fork.update(b"def");

        assert_eq!(original.finalize(), Hasher::digest(HashAlgorithm::Sha256, b"abc"));
        assert_eq!(fork.finalize(), Hasher::digest(HashAlgorithm::Sha256, b"abcdef"));
    }

    #[test]
    fn reports_algorithm() {
        for algo in HashAlgorithm::ALL {
            assert_eq!(Hasher::new(algo).algorithm(), algo);
        }
    }
}
