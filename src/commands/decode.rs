use super::read_stdin_bytes;
use crate::cli::{Cli, DecodeArgs};
use colored::*;
use eyre::{Context, Result};
use llmspec::config::Config;
use llmspec::{DecodePolicy, Encoding, TextRecord};
use std::fs;
use std::path::Path;

pub fn run(cli: &Cli, args: &DecodeArgs) -> Result<()> {
    let config = Config::load(cli.config.as_ref(), Path::new("."))?;

    let data = match &args.file {
        Some(path) => fs::read(path).context(format!("Failed to read {}", path.display()))?,
        None => read_stdin_bytes()?,
    };

    let encoding = match &args.encoding {
        Some(name) => name.parse::<Encoding>().context("Invalid --encoding")?,
        None => config.decode.encoding,
    };
    let policy = resolve_policy(args, &config);

    let record = decode(&data, encoding, policy)?;
    if cli.verbose {
        eprintln!(
            "{} Decoded {} bytes as {} ({:?})",
            "✓".green(),
            data.len(),
            encoding.to_string().cyan(),
            policy
        );
    }
    println!("{}", record.text());

    Ok(())
}

/// Command-line flags win over the configured policy
pub fn resolve_policy(args: &DecodeArgs, config: &Config) -> DecodePolicy {
    if args.permissive {
        DecodePolicy::Permissive
    } else if args.strict {
        DecodePolicy::Strict
    } else {
        config.decode.policy
    }
}

pub fn decode(data: &[u8], encoding: Encoding, policy: DecodePolicy) -> Result<TextRecord> {
    let record = TextRecord::decode_bytes_in(data, encoding, policy).context("Failed to decode record")?;
    Ok(record)
}
