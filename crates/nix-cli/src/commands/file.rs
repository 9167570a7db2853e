use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nix_hash::hash_file;

use super::{hash_all, HashOpts};

#[derive(Args)]
pub struct FileArgs {
    #[command(flatten)]
    opts: HashOpts,

    /// Files to hash
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,
}

pub fn run(args: &FileArgs) -> Result<i32> {
    let algorithm = args.opts.algorithm;
    args.opts.output_format()?;
    let hashes = hash_all(&args.paths, |p| hash_file(algorithm, p))?;

    let mut out = io::stdout().lock();
    for hash in &hashes {
        writeln!(out, "{}", args.opts.render(hash)?)?;
    }
    Ok(0)
}
