//! Text codecs for digest bytes.
//!
//! Each codec exposes `encoded_len`, `encode` and a decoder that fails with
//! [`HashError`](crate::HashError) on a wrong length, a character outside
//! its alphabet, or a value the target size cannot hold.

pub mod base16;
pub mod base32;
pub mod base64;
