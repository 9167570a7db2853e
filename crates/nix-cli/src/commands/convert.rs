use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use nix_hash::{Hash, HashAlgorithm, HashFormat};

#[derive(Args)]
pub struct ConvertArgs {
    /// Target encoding (base16, base32, base64, sri)
    #[arg(long, value_name = "FORMAT")]
    to: HashFormat,

    /// Algorithm of hashes given without a type prefix
    #[arg(long = "type", value_name = "ALGO")]
    algorithm: Option<HashAlgorithm>,

    /// Prefix non-SRI output with `<algo>:`
    #[arg(long)]
    with_type: bool,

    /// Hash literals to convert
    #[arg(value_name = "HASH", required = true)]
    hashes: Vec<String>,
}

pub fn run(args: &ConvertArgs) -> Result<i32> {
    let mut out = io::stdout().lock();
    for literal in &args.hashes {
        let hash = Hash::parse_any(literal, args.algorithm)
            .with_context(|| format!("cannot convert '{literal}'"))?;
        writeln!(out, "{}", hash.encode(args.to, args.with_type))?;
    }
    Ok(0)
}
