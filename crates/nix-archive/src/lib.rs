//! Canonical serialization of file-system trees.
//!
//! A path is dumped as a "Nix archive": a byte stream that depends only on
//! the names, types, contents, executable bits and symlink targets of the
//! entries below it. Timestamps, ownership and the other permission bits
//! never reach the stream, and directory entries are always emitted in
//! sorted order, so the same tree produces the same bytes on any machine.

mod dump;
mod filter;
pub mod wire;

pub use dump::{dump_bytes, dump_path};
pub use filter::{accept_all, PathFilter};
pub use wire::ARCHIVE_MAGIC;
