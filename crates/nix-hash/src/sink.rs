//! Streaming digest computation.

use std::io::{self, Write};

use crate::hasher::Hasher;
use crate::{Hash, HashAlgorithm};

/// Writes are collected up to this many bytes before reaching the context.
const BUFFER_SIZE: usize = 32 * 1024;

/// A digest together with the number of bytes it covers.
///
/// The count matters when the hashed bytes were generated on the fly, as
/// with an archive dump, and their size is not otherwise known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashResult {
    pub hash: Hash,
    pub size: u64,
}

/// A byte sink that turns everything written to it into a digest.
pub trait AbstractHashSink: Write {
    /// Finalize the digest, consuming the sink.
    fn finish(self) -> HashResult;
}

/// Incremental hashing over arbitrarily split input.
///
/// Chunk boundaries never affect the result. The sink is single-writer;
/// hash independent inputs with independent sinks. `Clone` forks the
/// computation at its current position.
#[derive(Clone)]
pub struct HashSink {
    hasher: Hasher,
    buffer: Vec<u8>,
    size: u64,
}

impl HashSink {
    /// Create an empty sink for `algorithm`.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            hasher: Hasher::new(algorithm),
            buffer: Vec::new(),
            size: 0,
        }
    }

    /// The algorithm being computed.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.hasher.algorithm()
    }

    /// Total bytes accepted so far.
    pub fn bytes_written(&self) -> u64 {
        self.size
    }

    /// Feed a chunk of input.
    pub fn update(&mut self, data: &[u8]) {
        self.size += data.len() as u64;
        if self.buffer.len() + data.len() > BUFFER_SIZE {
            self.flush_buffer();
            if data.len() >= BUFFER_SIZE {
                self.hasher.update(data);
                return;
            }
        }
        if self.buffer.capacity() == 0 {
            self.buffer.reserve_exact(BUFFER_SIZE);
        }
        self.buffer.extend_from_slice(data);
    }

    /// The digest of everything written so far.
    ///
    /// Finalizes a copy of the context; the sink itself keeps accepting
    /// writes as if this had never been called.
    pub fn current_hash(&self) -> HashResult {
        let mut snapshot = self.hasher.clone();
        snapshot.update(&self.buffer);
        HashResult {
            hash: snapshot.finalize(),
            size: self.size,
        }
    }

    fn flush_buffer(&mut self) {
        if !self.buffer.is_empty() {
            self.hasher.update(&self.buffer);
            self.buffer.clear();
        }
    }
}

impl AbstractHashSink for HashSink {
    fn finish(mut self) -> HashResult {
        self.flush_buffer();
        let result = HashResult {
            hash: self.hasher.finalize(),
            size: self.size,
        };
        tracing::debug!(
            algorithm = %result.hash.algorithm(),
            size = result.size,
            "finished hash sink"
        );
        result
    }
}

impl Write for HashSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buffer();
        Ok(())
    }
}
