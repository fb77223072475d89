//! Decode a binary VDF file, print it as JSON, and write it back out.
//!
//! Usage: cargo run --example vdf_json --features serde -- <input.vdf> [-o out.vdf]
//!
//! The re-encoded file is byte-identical to the input when the input has no
//! duplicate keys and no bytes after the top-level map.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use binary_vdf::{DEFAULT_MAX_DEPTH, DecodeConfig, EncodeConfig};
use clap::Parser;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Convert a binary VDF file to JSON and re-encode it
#[derive(Parser, Debug)]
#[command(name = "vdf_json")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Binary VDF file to read
    input: PathBuf,

    /// Where to write the re-encoded VDF
    #[arg(short, long, default_value = "out.vdf")]
    output: PathBuf,

    /// Maximum map nesting depth accepted in either direction
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, env = "VDF_MAX_DEPTH")]
    max_depth: usize,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let data = fs::read(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    debug!("Read {} bytes from {}", data.len(), cli.input.display());

    let decode_config = DecodeConfig::new().with_max_depth(cli.max_depth);
    let (entries, consumed) = binary_vdf::decode_partial(&data, &decode_config)
        .with_context(|| format!("Failed to decode {}", cli.input.display()))?;
    if consumed < data.len() {
        warn!(
            "Ignoring {} trailing bytes after the top-level map",
            data.len() - consumed
        );
    }
    info!("Decoded {} top-level entries", entries.len());

    let json = if cli.pretty {
        serde_json::to_string_pretty(&entries)
    } else {
        serde_json::to_string(&entries)
    }
    .context("Failed to serialize to JSON")?;
    println!("{json}");

    let encode_config = EncodeConfig::new().with_max_depth(cli.max_depth);
    let bytes = binary_vdf::encode_with_config(&entries, &encode_config)
        .context("Failed to re-encode VDF")?;
    fs::write(&cli.output, &bytes)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;
    info!("Wrote {} bytes to {}", bytes.len(), cli.output.display());

    Ok(())
}
