use crate::HashAlgorithm;

/// A bad hash: every way a digest, its name or its text form can be invalid.
///
/// I/O failures are never wrapped in this type; they surface as
/// [`std::io::Error`] from the functions that touch the file system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("unknown hash algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("unknown hash format '{0}'")]
    UnknownFormat(String),

    #[error("hash '{hash}' has wrong length for hash type '{algorithm}'")]
    WrongLength {
        hash: String,
        algorithm: HashAlgorithm,
    },

    #[error("invalid {encoding} length: expected {expected}, got {actual}")]
    InvalidEncodedLength {
        encoding: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {encoding} character at position {position}: '{character}'")]
    InvalidCharacter {
        encoding: &'static str,
        position: usize,
        character: char,
    },

    #[error("invalid {encoding} hash '{hash}'")]
    InvalidEncoding {
        encoding: &'static str,
        hash: String,
    },

    #[error("hash '{hash}' should have type '{expected}'")]
    TypeMismatch {
        hash: String,
        expected: HashAlgorithm,
        actual: HashAlgorithm,
    },

    #[error("hash '{0}' does not include a type")]
    MissingTypePrefix(String),

    #[error("hash '{0}' does not include a type, nor is the type otherwise known from context")]
    MissingType(String),

    #[error("hash '{0}' is not SRI")]
    NotSri(String),

    #[error("empty hash requires explicit hash type")]
    EmptyWithoutType,

    #[error("invalid hash length: expected {expected} bytes, got {actual}")]
    InvalidHashLength { expected: usize, actual: usize },

    #[error("cannot compress a hash to {0} bytes")]
    InvalidCompressSize(usize),
}
