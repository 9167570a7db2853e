use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use nix_archive::{accept_all, dump_path};

#[derive(Args)]
pub struct DumpArgs {
    /// Path to serialize
    #[arg(value_name = "PATH")]
    path: PathBuf,
}

pub fn run(args: &DumpArgs) -> Result<i32> {
    let mut out = BufWriter::new(io::stdout().lock());
    dump_path(&args.path, &accept_all, &mut out)
        .with_context(|| format!("cannot dump '{}'", args.path.display()))?;
    out.flush()?;
    Ok(0)
}
