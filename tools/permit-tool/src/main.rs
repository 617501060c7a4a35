use alloy_primitives::Address;
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use permit_codec::{classify, classify_as, CanonicalPermit, CompactPermit, Encoding};
use tracing::{debug, info};

mod input;
mod logging;
mod report;

use input::{encode_hex, parse_address, read_blob};
use logging::{setup_logger, LevelFilter};
use report::{canonical_report, compact_report, Classification, Conversion};

/// Compress and decompress token permit calldata.
///
/// Blobs are hex strings (with or without `0x`) holding the ABI-encoded permit parameters
/// without the function selector, or the compact encoding of the same permit. When the blob
/// argument is omitted or `-`, it is read from stdin.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Stderr log level. `RUST_LOG` directives take precedence.
    #[arg(long, env = "PERMIT_LOG_LEVEL", default_value = "warn")]
    log_level: LevelFilter,

    /// Print machine-readable JSON instead of bare output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the permit shape and encoding of a blob, from its length alone.
    Classify { blob: Option<String> },

    /// Compress canonical permit parameters.
    Compress { blob: Option<String> },

    /// Rebuild canonical permit parameters from a compact blob.
    Decompress {
        blob: Option<String>,

        /// Token address. Required for Permit2 permits, ignored otherwise.
        #[arg(long, env = "PERMIT_TOKEN", value_parser = parse_address)]
        token: Option<Address>,

        /// Permit owner (holder for Dai-like permits).
        #[arg(long, env = "PERMIT_OWNER", value_parser = parse_address)]
        owner: Address,

        #[arg(long, env = "PERMIT_SPENDER", value_parser = parse_address)]
        spender: Address,
    },

    /// Decode a blob in either encoding and print its fields as JSON.
    Inspect { blob: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.log_level);

    let output = match &cli.command {
        Command::Classify { blob } => run_classify(blob.as_deref(), cli.json)?,
        Command::Compress { blob } => run_compress(blob.as_deref(), cli.json)?,
        Command::Decompress { blob, token, owner, spender } => {
            run_decompress(blob.as_deref(), *token, *owner, *spender, cli.json)?
        }
        Command::Inspect { blob } => run_inspect(blob.as_deref())?,
    };

    println!("{output}");
    Ok(())
}

fn run_classify(blob: Option<&str>, json: bool) -> Result<String> {
    let bytes = read_blob(blob)?;
    let (variant, encoding) =
        classify(bytes.len()).ok_or_else(|| anyhow!("invalid permit length: {} bytes", bytes.len()))?;
    debug!(%variant, %encoding, len = bytes.len(), "classified permit");

    if json {
        let report = Classification::new(variant, encoding, bytes.len());
        return serde_json::to_string_pretty(&report).context("failed serialising classification");
    }
    Ok(format!("{variant} ({encoding}, {} bytes)", bytes.len()))
}

fn run_compress(blob: Option<&str>, json: bool) -> Result<String> {
    let bytes = read_blob(blob)?;
    let variant = classify_as(bytes.len(), Encoding::Canonical).context("cannot compress permit")?;
    let compact = permit_codec::compress(&bytes)
        .with_context(|| format!("failed compressing {variant} permit"))?;
    info!(%variant, from = bytes.len(), to = compact.len(), "compressed permit");

    render_conversion(variant.name(), bytes.len(), &compact, json)
}

fn run_decompress(
    blob: Option<&str>,
    token: Option<Address>,
    owner: Address,
    spender: Address,
    json: bool,
) -> Result<String> {
    let bytes = read_blob(blob)?;
    let variant = classify_as(bytes.len(), Encoding::Compact).context("cannot decompress permit")?;
    let token = match token {
        Some(token) => token,
        None if variant.has_token() => bail!("--token is required to decompress a {variant} permit"),
        None => Address::ZERO,
    };
    if !variant.has_token() && token != Address::ZERO {
        debug!(%variant, "ignoring --token, the canonical call has no token field");
    }

    let canonical = permit_codec::decompress(&bytes, token, owner, spender)
        .with_context(|| format!("failed decompressing {variant} permit"))?;
    info!(%variant, from = bytes.len(), to = canonical.len(), "decompressed permit");

    render_conversion(variant.name(), bytes.len(), &canonical, json)
}

fn run_inspect(blob: Option<&str>) -> Result<String> {
    let bytes = read_blob(blob)?;
    let (variant, encoding) =
        classify(bytes.len()).ok_or_else(|| anyhow!("invalid permit length: {} bytes", bytes.len()))?;
    debug!(%variant, %encoding, "inspecting permit");

    let report = match encoding {
        Encoding::Canonical => canonical_report(
            &CanonicalPermit::decode(&bytes).with_context(|| format!("failed decoding {variant} permit"))?,
        ),
        Encoding::Compact => compact_report(
            &CompactPermit::decode(&bytes).with_context(|| format!("failed decoding {variant} permit"))?,
        ),
    };
    serde_json::to_string_pretty(&report).context("failed serialising permit report")
}

fn render_conversion(variant: &'static str, input_len: usize, output: &[u8], json: bool) -> Result<String> {
    if !json {
        return Ok(encode_hex(output));
    }
    let report = Conversion { variant, input_len, output_len: output.len(), output: encode_hex(output) };
    serde_json::to_string_pretty(&report).context("failed serialising conversion")
}
