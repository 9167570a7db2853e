use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use nix_hash::hash_path;

use super::{hash_all, HashOpts};

#[derive(Args)]
pub struct PathArgs {
    #[command(flatten)]
    opts: HashOpts,

    /// Leave out entries with this file name (repeatable)
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Also print the size of the archive that was hashed
    #[arg(long)]
    size: bool,

    /// Paths to hash
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,
}

pub fn run(args: &PathArgs) -> Result<i32> {
    let algorithm = args.opts.algorithm;
    args.opts.output_format()?;
    let excluded = |p: &Path| {
        p.file_name()
            .map_or(true, |name| !args.exclude.iter().any(|e| name == e.as_str()))
    };
    let results = hash_all(&args.paths, |p| hash_path(algorithm, p, &excluded))?;

    let mut out = io::stdout().lock();
    for result in &results {
        let rendered = args.opts.render(&result.hash)?;
        if args.size {
            writeln!(out, "{rendered}\t{}", result.size)?;
        } else {
            writeln!(out, "{rendered}")?;
        }
    }
    Ok(0)
}
