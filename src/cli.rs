use anyhow::Result;
use clap::{Parser, Subcommand};
use leb128::format::{self, Notation};
use leb128::{append_signed, append_unsigned, try_decode_signed, try_decode_unsigned};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::config::{ToolConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "leb128")]
#[command(about = "Encode and decode LEB128 integers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Config file path")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, global = true, conflicts_with = "json", help = "Output as text (overrides config)")]
    pub text: bool,

    #[arg(long, global = true, help = "Byte notation, hex or binary (overrides config)")]
    pub format: Option<Notation>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode an unsigned 64-bit value
    EncodeUnsigned { value: u64 },
    /// Encode a signed 64-bit value
    EncodeSigned {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Decode an unsigned value from the front of the given bytes
    DecodeUnsigned {
        #[arg(required = true, num_args = 1..)]
        bytes: Vec<String>,
    },
    /// Decode a signed value from the front of the given bytes
    DecodeSigned {
        #[arg(required = true, num_args = 1..)]
        bytes: Vec<String>,
    },
    /// Write a default config file
    GenerateConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Config file path")]
        output: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(v) => write!(f, "{}", v),
            Value::Signed(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub value: Value,
    pub bytes: String,
    pub len: usize,
}

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub value: Value,
    pub consumed: usize,
    pub trailing: usize,
}

pub fn encode(value: Value, config: &ToolConfig) -> EncodeReport {
    let mut out = Vec::new();
    let len = match value {
        Value::Unsigned(v) => append_unsigned(&mut out, v),
        Value::Signed(v) => append_signed(&mut out, v),
    };
    EncodeReport {
        value,
        bytes: format::render(&out, config.format, config.separator),
        len,
    }
}

pub fn decode(input: &str, signed: bool, config: &ToolConfig) -> Result<DecodeReport> {
    let bytes = format::parse(input, config.format)?;
    debug!("decoding {} input bytes", bytes.len());

    let (value, consumed) = if signed {
        try_decode_signed(&bytes).map(|(v, n)| (Value::Signed(v), n))?
    } else {
        try_decode_unsigned(&bytes).map(|(v, n)| (Value::Unsigned(v), n))?
    };

    Ok(DecodeReport {
        value,
        consumed,
        trailing: bytes.len() - consumed,
    })
}

/// Command line flags win over the config file.
pub fn apply_overrides(cli: &Cli, config: &mut ToolConfig) {
    if cli.json {
        config.json = true;
    }
    if cli.text {
        config.json = false;
    }
    if let Some(notation) = cli.format {
        config.format = notation;
    }
}

pub fn run(cli: Cli, mut config: ToolConfig) -> Result<()> {
    apply_overrides(&cli, &mut config);

    match cli.command {
        Commands::EncodeUnsigned { value } => {
            let report = encode(Value::Unsigned(value), &config);
            print_encode(&report, config.json)
        }
        Commands::EncodeSigned { value } => {
            let report = encode(Value::Signed(value), &config);
            print_encode(&report, config.json)
        }
        Commands::DecodeUnsigned { bytes } => decode_and_print(&bytes.join(" "), false, &config),
        Commands::DecodeSigned { bytes } => decode_and_print(&bytes.join(" "), true, &config),
        Commands::GenerateConfig { output } => {
            ToolConfig::default().save(&output)?;
            if config.json {
                println!("{}", serde_json::json!({"success": true, "output": output}));
            } else {
                println!("Config written to {}", output);
            }
            Ok(())
        }
    }
}

fn print_encode(report: &EncodeReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{} ({} bytes)", report.bytes, report.len);
    }
    Ok(())
}

fn decode_and_print(input: &str, signed: bool, config: &ToolConfig) -> Result<()> {
    match decode(input, signed, config) {
        Ok(report) => {
            if config.json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!(
                    "{} ({} bytes consumed, {} trailing)",
                    report.value, report.consumed, report.trailing
                );
            }
            Ok(())
        }
        Err(e) => {
            if config.json {
                println!("{}", serde_json::json!({"error": e.to_string()}));
            }
            Err(e.context("decode failed"))
        }
    }
}
