//! Hashing of in-memory data, files and file-system trees.

use std::fs::File;
use std::io;
use std::path::Path;

use nix_archive::{dump_path, PathFilter};

use crate::{AbstractHashSink, Hash, HashAlgorithm, HashResult, HashSink};

/// Hash an in-memory byte string.
pub fn hash_string(algorithm: HashAlgorithm, data: impl AsRef<[u8]>) -> Hash {
    let mut sink = HashSink::new(algorithm);
    sink.update(data.as_ref());
    sink.finish().hash
}

/// Hash the contents of a file.
///
/// Only the bytes are hashed; permission bits and other metadata are not.
pub fn hash_file(algorithm: HashAlgorithm, path: impl AsRef<Path>) -> io::Result<Hash> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut sink = HashSink::new(algorithm);
    io::copy(&mut file, &mut sink)?;
    let result = sink.finish();
    tracing::debug!(path = %path.display(), size = result.size, "hashed file");
    Ok(result.hash)
}

/// Hash the archive serialization of `path`.
///
/// The archive is streamed into the sink as it is produced. The returned
/// size is the length of the archive, not of the tree on disk.
pub fn hash_path<F>(algorithm: HashAlgorithm, path: impl AsRef<Path>, filter: &F) -> io::Result<HashResult>
where
    F: PathFilter + ?Sized,
{
    let path = path.as_ref();
    let mut sink = HashSink::new(algorithm);
    dump_path(path, filter, &mut sink)?;
    let result = sink.finish();
    tracing::debug!(path = %path.display(), size = result.size, "hashed path");
    Ok(result)
}
