//! Base58Check addresses: `version ‖ hash160 ‖ checksum`, 25 bytes before encoding.
//!
//! Two ways to get a digest back out of an address exist on purpose. [`decode`] (and
//! [`address_to_hash160`]) strips the version and checksum without looking at them, so it
//! gives no integrity guarantee. [`decode_checked`] and [`check`] also enforce the version
//! ceiling and the checksum. Pick per call site.

use crate::base58_check::{self, compute_checksum, verify_checksum, CHECKSUM_LENGTH};
use crate::hash160::{self, Hash160, HASH160_LENGTH};
use crate::{base58, hex};
use serde::{Serialize, Serializer};
use std::{error, fmt, str::FromStr};

pub const ADDRESS_LENGTH: usize = 1 + HASH160_LENGTH + CHECKSUM_LENGTH;

/// Longest base-58 rendering of `ADDRESS_LENGTH` bytes, leading zero bytes included.
pub const MAX_ADDRESS_CHARACTERS: usize = 35;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    MalformedLength { length: usize },
    TooManyCharacters { length: usize },
    ChecksumMismatch { checksum: [u8; CHECKSUM_LENGTH], expected_checksum: [u8; CHECKSUM_LENGTH] },
    VersionRejected { version: Version, max_version: Version },
    InvalidVersion,
    InvalidHash160(hash160::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
            Error::MalformedLength { length } => {
                write!(f, "Address must decode to {} bytes ({} decoded)", ADDRESS_LENGTH, length)
            }
            Error::TooManyCharacters { length } => {
                write!(f, "Address is {} characters long ({} at most)", length, MAX_ADDRESS_CHARACTERS)
            }
            Error::ChecksumMismatch {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "Invalid checksum '{}' ({} expected)",
                hex::encode(checksum),
                hex::encode(expected_checksum)
            ),
            Error::VersionRejected { version, max_version } => {
                write!(f, "Version {} exceeds maximum {}", version, max_version)
            }
            Error::InvalidVersion => write!(f, "Version must be a single hex byte"),
            Error::InvalidHash160(error) => write!(f, "{}", error),
        }
    }
}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        match error {
            base58::decode::Error::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            base58::decode::Error::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

impl From<hash160::Error> for Error {
    fn from(error: hash160::Error) -> Self {
        Error::InvalidHash160(error)
    }
}

/// Leading byte selecting the address namespace. Ordered by numeric value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Version(u8);

impl Version {
    pub const MAINNET: Version = Version(0x00);
    pub const MAX: Version = Version(0xFF);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    /// A single hex byte such as `"00"`, `"6f"` or `"0x05"`.
    pub fn from_hex(input: &str) -> Result<Self, Error> {
        match hex::decode(hex::strip_prefix(input)).as_deref() {
            Ok([value]) => Ok(Self(*value)),
            _ => Err(Error::InvalidVersion),
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_hex(input)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// The three fields of a decoded address, checksum not yet verified.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UncheckedAddress {
    pub version: Version,
    pub hash160: Hash160,
    pub checksum: [u8; CHECKSUM_LENGTH],
}

impl UncheckedAddress {
    /// Fails only on characters outside the alphabet or a decoded length other than 25.
    /// Anything longer than [`MAX_ADDRESS_CHARACTERS`] cannot decode to 25 bytes and is
    /// rejected before any arithmetic.
    pub fn parse(address: &str) -> Result<Self, Error> {
        if address.len() > MAX_ADDRESS_CHARACTERS {
            return Err(Error::TooManyCharacters { length: address.len() });
        }
        let full = base58::decode_bytes(address)?;
        if full.len() != ADDRESS_LENGTH {
            return Err(Error::MalformedLength { length: full.len() });
        }
        let mut hash160 = [0u8; HASH160_LENGTH];
        hash160.copy_from_slice(&full[1..1 + HASH160_LENGTH]);
        let mut checksum = [0u8; CHECKSUM_LENGTH];
        checksum.copy_from_slice(&full[1 + HASH160_LENGTH..]);
        Ok(Self {
            version: Version(full[0]),
            hash160: Hash160::new(hash160),
            checksum,
        })
    }

    fn payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + HASH160_LENGTH);
        payload.push(self.version.value());
        payload.extend_from_slice(self.hash160.as_bytes());
        payload
    }

    pub fn is_checksum_valid(&self) -> bool {
        verify_checksum(self.payload(), self.checksum)
    }

    /// Enforces the version ceiling first, then the checksum.
    pub fn verify(self, max_version: Version) -> Result<Address, Error> {
        if self.version > max_version {
            return Err(Error::VersionRejected {
                version: self.version,
                max_version,
            });
        }
        let expected_checksum = compute_checksum(self.payload());
        if self.checksum != expected_checksum {
            return Err(Error::ChecksumMismatch {
                checksum: self.checksum,
                expected_checksum,
            });
        }
        Ok(Address::new(self.hash160, self.version))
    }
}

/// A digest together with the namespace it is published in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Address {
    version: Version,
    hash160: Hash160,
}

impl Address {
    pub const fn new(hash160: Hash160, version: Version) -> Self {
        Self { version, hash160 }
    }

    pub fn from_public_key(public_key: impl AsRef<[u8]>, version: Version) -> Self {
        Self::new(Hash160::from_public_key(public_key), version)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn hash160(&self) -> &Hash160 {
        &self.hash160
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode(&self.hash160, self.version))
    }
}

/// Validated decode accepting any version byte.
impl FromStr for Address {
    type Err = Error;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        check(address, Version::MAX)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn encode(hash160: &Hash160, version: Version) -> String {
    let mut payload = Vec::with_capacity(1 + HASH160_LENGTH);
    payload.push(version.value());
    payload.extend_from_slice(hash160.as_bytes());
    base58_check::encode(payload)
}

/// Strips version and checksum without verifying either.
pub fn decode(address: &str) -> Result<Hash160, Error> {
    Ok(UncheckedAddress::parse(address)?.hash160)
}

/// Like [`decode`] but also rejects versions above `max_version` and bad checksums.
pub fn decode_checked(address: &str, max_version: Version) -> Result<Hash160, Error> {
    Ok(*check(address, max_version)?.hash160())
}

pub fn check(address: &str, max_version: Version) -> Result<Address, Error> {
    UncheckedAddress::parse(address)?.verify(max_version)
}

/// Never fails: any malformed address is simply not valid.
pub fn validate(address: &str, max_version: Version) -> bool {
    check(address, max_version).is_ok()
}

/// Unchecked extraction rendered as uppercase hex.
pub fn address_to_hash160(address: &str) -> Result<String, Error> {
    Ok(decode(address)?.to_hex())
}

pub fn hash160_to_address(hash160: &str, version: Version) -> Result<String, Error> {
    Ok(encode(&Hash160::from_hex(hash160)?, version))
}

pub fn public_key_to_address(public_key: impl AsRef<[u8]>, version: Version) -> String {
    encode(&Hash160::from_public_key(public_key), version)
}
