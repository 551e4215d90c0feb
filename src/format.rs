//! Text notations for encoded bytes.
//!
//! `Hex` is plain lowercase hex in wire order. `Binary` writes each byte as
//! eight binary digits with the last (most significant) group first, so
//! 624485 reads `00100110 10001110 11100101`.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Hex,
    Binary,
}

impl FromStr for Notation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Notation::Hex),
            "binary" | "bin" => Ok(Notation::Binary),
            other => Err(anyhow!("unknown notation '{}', expected hex or binary", other)),
        }
    }
}

/// Lowercase hex in wire order, optionally one space between bytes.
pub fn to_hex(bytes: &[u8], separated: bool) -> String {
    if !separated {
        return hex::encode(bytes);
    }
    bytes.iter().map(|b| hex::encode([*b])).collect::<Vec<_>>().join(" ")
}

/// Binary group notation, most significant byte first.
pub fn to_binary(bytes: &[u8]) -> String {
    bytes
        .iter()
        .rev()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write `bytes` in the given notation.
pub fn render(bytes: &[u8], notation: Notation, separated: bool) -> String {
    match notation {
        Notation::Hex => to_hex(bytes, separated),
        Notation::Binary => to_binary(bytes),
    }
}

/// Parse hex split by any whitespace, each piece with an optional `0x`/`0X`
/// prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input
        .split_whitespace()
        .map(|token| {
            token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
        })
        .collect();
    hex::decode(&digits).with_context(|| format!("invalid hex input '{}'", input))
}

/// Parse the MSB-first binary group notation back into wire order.
pub fn parse_binary(input: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for group in input.split_whitespace() {
        if group.len() > 8 {
            bail!("binary group '{}' is longer than 8 digits", group);
        }
        let byte = u8::from_str_radix(group, 2)
            .with_context(|| format!("invalid binary group '{}'", group))?;
        bytes.push(byte);
    }
    bytes.reverse();
    Ok(bytes)
}

/// Read bytes written in the given notation.
pub fn parse(input: &str, notation: Notation) -> Result<Vec<u8>> {
    match notation {
        Notation::Hex => parse_hex(input),
        Notation::Binary => parse_binary(input),
    }
}
