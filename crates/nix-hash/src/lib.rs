//! Content digests for content-addressed storage.
//!
//! This crate provides the [`Hash`] value type, its four text encodings
//! (base-16, the storage-specific base-32, base-64 and SRI), hash literal
//! parsing, the streaming [`HashSink`], file and tree hashing, and the
//! [`compress_hash`] fold used to shorten digests for identifiers.

mod algorithm;
mod error;
mod format;
mod hash;
mod parse;
pub mod encoding;
pub mod hasher;
pub mod sink;
pub mod file;

pub use algorithm::{parse_hash_type, parse_hash_type_opt, print_hash_type, HashAlgorithm};
pub use error::HashError;
pub use file::{hash_file, hash_path, hash_string};
pub use format::{parse_hash_format, parse_hash_format_opt, print_hash_format, HashFormat};
pub use hash::{compress_hash, new_hash_allow_empty, print_hash16_or32, Hash, MAX_HASH_SIZE};
pub use sink::{AbstractHashSink, HashResult, HashSink};

pub use nix_archive::{accept_all, PathFilter};
