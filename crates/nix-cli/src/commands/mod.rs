pub mod convert;
pub mod dump;
pub mod file;
pub mod path;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use nix_hash::{compress_hash, Hash, HashAlgorithm, HashFormat};
use rayon::prelude::*;

/// Size of a `--truncate`d digest, in bytes.
const TRUNCATED_SIZE: usize = 20;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the digest of the contents of regular files
    File(file::FileArgs),
    /// Print the digest of the archive serialization of paths
    Path(path::PathArgs),
    /// Re-encode hash literals
    Convert(convert::ConvertArgs),
    /// Write the archive serialization of a path to stdout
    Dump(dump::DumpArgs),
}

pub fn run(command: Commands) -> Result<i32> {
    match command {
        Commands::File(args) => file::run(&args),
        Commands::Path(args) => path::run(&args),
        Commands::Convert(args) => convert::run(&args),
        Commands::Dump(args) => dump::run(&args),
    }
}

/// Options shared by the commands that compute digests.
#[derive(Args)]
pub struct HashOpts {
    /// Hash algorithm (md5, sha1, sha256, sha512)
    #[arg(long = "type", value_name = "ALGO", env = "NIXHASH_ALGO", default_value_t = HashAlgorithm::Sha256)]
    pub algorithm: HashAlgorithm,

    /// Output encoding (base16, base32, base64, sri) [default: sri, or
    /// base32 with --truncate]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<HashFormat>,

    /// Fold the digest down to 20 bytes
    #[arg(long)]
    pub truncate: bool,
}

impl HashOpts {
    /// The encoding to print in. A folded digest no longer has its
    /// algorithm's size, so it cannot be written as SRI.
    pub fn output_format(&self) -> Result<HashFormat> {
        match (self.format, self.truncate) {
            (Some(HashFormat::Sri), true) => {
                bail!("--truncate cannot be combined with --format sri")
            }
            (Some(format), _) => Ok(format),
            (None, true) => Ok(HashFormat::Base32),
            (None, false) => Ok(HashFormat::Sri),
        }
    }

    pub fn render(&self, hash: &Hash) -> Result<String> {
        let format = self.output_format()?;
        let hash = if self.truncate {
            compress_hash(hash, TRUNCATED_SIZE)?
        } else {
            *hash
        };
        Ok(hash.encode(format, false))
    }
}

/// Hash every path on the rayon pool, one sink per path. Results come back
/// in argument order.
fn hash_all<T, F>(paths: &[PathBuf], f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&Path) -> io::Result<T> + Sync,
{
    tracing::debug!(count = paths.len(), threads = rayon::current_num_threads(), "hashing paths");
    paths
        .par_iter()
        .map(|p| f(p).with_context(|| format!("cannot hash '{}'", p.display())))
        .collect()
}
