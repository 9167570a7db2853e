//! Low-level framing of the archive stream.
//!
//! Every token is a string: a little-endian `u64` length, the raw bytes,
//! then zero bytes up to the next multiple of eight.

use std::io::{self, Write};

/// The first string of every archive.
pub const ARCHIVE_MAGIC: &str = "nix-archive-1";

const PADDING: [u8; 8] = [0; 8];

/// Number of zero bytes following a string payload of `len` bytes.
pub const fn padding_len(len: u64) -> usize {
    ((8 - len % 8) % 8) as usize
}

/// Write a bare little-endian `u64`.
pub fn write_u64<W: Write + ?Sized>(sink: &mut W, n: u64) -> io::Result<()> {
    sink.write_all(&n.to_le_bytes())
}

/// Write the padding that follows a payload of `len` bytes.
pub fn write_padding<W: Write + ?Sized>(sink: &mut W, len: u64) -> io::Result<()> {
    sink.write_all(&PADDING[..padding_len(len)])
}

/// Write a length-prefixed, padded byte string.
pub fn write_bytes<W: Write + ?Sized>(sink: &mut W, data: &[u8]) -> io::Result<()> {
    let len = data.len() as u64;
    write_u64(sink, len)?;
    sink.write_all(data)?;
    write_padding(sink, len)
}

/// Write a length-prefixed, padded UTF-8 token.
pub fn write_str<W: Write + ?Sized>(sink: &mut W, s: &str) -> io::Result<()> {
    write_bytes(sink, s.as_bytes())
}
