use crate::address::{self, UncheckedAddress};
use crate::{hex, Configuration, Error, Hash160, Logger, PartialLogger, Version};
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{BufRead, Write};

pub const USAGE: &str = "\
usage: base58-address <command> [args]
  encode <hash160-hex> [version-hex]
  decode <address>
  validate <address> [max-version-hex]
  pubkey <public-key-hex> [version-hex]
  validate-stream   (addresses on stdin, one per line)";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Encode { hash160: Hash160, version: Version },
    Decode { address: String },
    Validate { address: String, max_version: Version },
    PublicKey { public_key: Vec<u8>, version: Version },
    ValidateStream { max_version: Version },
}

fn version_arg(arg: Option<&String>, default: Version) -> Result<Version, Error> {
    match arg {
        Some(arg) => Version::from_hex(arg).map_err(|error| Error::context(format!("Invalid version \"{}\"", arg), error)),
        None => Ok(default),
    }
}

fn required<'a>(arg: Option<&'a String>, name: &str) -> Result<&'a String, Error> {
    arg.ok_or_else(|| Error::new(format!("Missing {}\n{}", name, USAGE)))
}

impl Command {
    /// `args` excludes the program name.
    pub fn parse(args: &[String], configuration: &Configuration) -> Result<Self, Error> {
        let name = required(args.first(), "command")?;
        let (first, second) = (args.get(1), args.get(2));
        let command = match name.as_str() {
            "encode" => {
                let hash160 = required(first, "hash160")?;
                Command::Encode {
                    hash160: Hash160::from_hex(hash160).map_err(|error| Error::context(format!("Invalid hash160 \"{}\"", hash160), error))?,
                    version: version_arg(second, configuration.address_version())?,
                }
            }
            "decode" => Command::Decode {
                address: required(first, "address")?.clone(),
            },
            "validate" => Command::Validate {
                address: required(first, "address")?.clone(),
                max_version: version_arg(second, configuration.max_address_version())?,
            },
            "pubkey" => {
                let public_key = required(first, "public key")?;
                Command::PublicKey {
                    public_key: hex::decode(hex::strip_prefix(public_key))
                        .map_err(|error| Error::context(format!("Invalid public key \"{}\"", public_key), error))?,
                    version: version_arg(second, configuration.address_version())?,
                }
            }
            "validate-stream" => Command::ValidateStream {
                max_version: configuration.max_address_version(),
            },
            other => return Err(Error::new(format!("Unknown command \"{}\"\n{}", other, USAGE))),
        };
        Ok(command)
    }
}

#[derive(Debug, Serialize)]
pub struct Validation<'a> {
    pub address: &'a str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl<'a> Validation<'a> {
    pub fn new(address: &'a str, max_version: Version) -> Self {
        match address::check(address, max_version) {
            Ok(_) => Self {
                address,
                valid: true,
                reason: None,
            },
            Err(error) => Self {
                address,
                valid: false,
                reason: Some(error.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Decoded {
    pub version: String,
    pub hash160: Hash160,
    pub checksum: String,
    pub checksum_valid: bool,
}

impl From<UncheckedAddress> for Decoded {
    fn from(unchecked: UncheckedAddress) -> Self {
        Self {
            version: unchecked.version.to_string(),
            hash160: unchecked.hash160,
            checksum: hex::encode(unchecked.checksum),
            checksum_valid: unchecked.is_checksum_valid(),
        }
    }
}

fn to_value(value: impl Serialize) -> Result<Value, Error> {
    serde_json::to_value(value).map_err(|error| Error::context("Could not serialize result", error))
}

/// Runs every command except `validate-stream`, which needs input and output streams.
pub fn run(command: &Command, logger: &Logger) -> Result<Value, Error> {
    match command {
        Command::Encode { hash160, version } => {
            logger.log(format!("encode {} (version {})", hash160, version));
            Ok(json!({ "address": address::encode(hash160, *version) }))
        }
        Command::Decode { address } => {
            logger.log(format!("decode {}", address));
            let unchecked = UncheckedAddress::parse(address).map_err(|error| Error::context(format!("Invalid address \"{}\"", address), error))?;
            to_value(Decoded::from(unchecked))
        }
        Command::Validate { address, max_version } => {
            logger.log(format!("validate {} (max version {})", address, max_version));
            to_value(Validation::new(address, *max_version))
        }
        Command::PublicKey { public_key, version } => {
            logger.log(format!("pubkey {} (version {})", hex::encode(public_key), version));
            let hash160 = Hash160::from_public_key(public_key);
            Ok(json!({ "hash160": hash160, "address": address::encode(&hash160, *version) }))
        }
        Command::ValidateStream { .. } => Err(Error::new("validate-stream reads from standard input")),
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct StreamSummary {
    pub total: usize,
    pub valid: usize,
}

/// Writes one JSON validation result per non-blank input line. Lines that are not UTF-8
/// are read lossily and reported invalid.
pub fn validate_stream(
    mut input: impl BufRead,
    mut output: impl Write,
    max_version: Version,
    interval: usize,
    logger: &Logger,
) -> Result<StreamSummary, Error> {
    let mut partial_logger = PartialLogger::new(interval, logger);
    let mut summary = StreamSummary::default();
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let read = input
            .read_until(b'\n', &mut buffer)
            .map_err(|error| Error::context("Could not read input", error))?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buffer);
        let address = line.trim();
        if address.is_empty() {
            continue;
        }
        let validation = Validation::new(address, max_version);
        summary.total += 1;
        if validation.valid {
            summary.valid += 1;
        }
        let line = serde_json::to_string(&validation).map_err(|error| Error::context("Could not serialize result", error))?;
        writeln!(output, "{}", line).map_err(|error| Error::context("Could not write output", error))?;
        partial_logger.log(|index| format!("Validated {} addresses", index + 1));
    }
    logger.log(format!("Validated {} addresses ({} valid)", summary.total, summary.valid));
    Ok(summary)
}
