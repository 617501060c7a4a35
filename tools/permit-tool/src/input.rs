use std::io::Read;

use alloy_primitives::Address;
use anyhow::{anyhow, Context, Result};

/// Read a hex blob from the argument, or from stdin when absent or `-`.
pub fn read_blob(arg: Option<&str>) -> Result<Vec<u8>> {
    let text = match arg {
        Some(text) if text != "-" => text.to_string(),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed reading stdin")?;
            buf
        }
    };
    decode_hex(&text)
}

pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
    hex::decode(digits).map_err(|e| anyhow!("invalid hex input: {e}"))
}

pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// `clap` value parser for addresses.
pub fn parse_address(text: &str) -> Result<Address, String> {
    text.trim().parse::<Address>().map_err(|e| format!("invalid address `{text}`: {e}"))
}
