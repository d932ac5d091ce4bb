use crate::{hashing, hex};
use serde::{Serialize, Serializer};
use std::{error, fmt, str::FromStr};

pub const HASH160_LENGTH: usize = 20;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    InvalidHex(hex::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { length } => write!(f, "Hash160 must be {} bytes long ({} given)", HASH160_LENGTH, length),
            Error::InvalidHex(error) => write!(f, "Invalid Hash160 hex: {}", error),
        }
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        Error::InvalidHex(error)
    }
}

/// 160-bit identity digest of a public key or script.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Hash160([u8; HASH160_LENGTH]);

impl Hash160 {
    pub const fn new(bytes: [u8; HASH160_LENGTH]) -> Self {
        Self(bytes)
    }

    /// `RIPEMD-160(SHA-256(public_key))`
    pub fn from_public_key(public_key: impl AsRef<[u8]>) -> Self {
        Self(hashing::ripemd160(hashing::sha256(public_key)))
    }

    pub fn from_slice(buffer: impl AsRef<[u8]>) -> Result<Self, Error> {
        let buffer = buffer.as_ref();
        let bytes: [u8; HASH160_LENGTH] = buffer
            .try_into()
            .map_err(|_| Error::InvalidLength { length: buffer.len() })?;
        Ok(Self(bytes))
    }

    /// Accepts either case and an optional `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, Error> {
        Self::from_slice(hex::decode(hex::strip_prefix(input))?)
    }

    pub fn as_bytes(&self) -> &[u8; HASH160_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Hash160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH160_LENGTH]> for Hash160 {
    fn from(bytes: [u8; HASH160_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Hash160 {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_hex(input)
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Hash160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Digest used to derive an address from a public key.
pub fn hash160(public_key: impl AsRef<[u8]>) -> Hash160 {
    Hash160::from_public_key(public_key)
}

#[cfg(test)]
mod tests {
    use super::{Error, Hash160};
    use crate::hex;

    #[test]
    fn from_public_key() {
        let compressed = hex::decode("0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798").unwrap();
        assert_eq!(super::hash160(&compressed).to_hex(), "751E76E8199196D454941C45D1B3A323F1433BD6");

        let uncompressed = hex::decode(
            "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb6\
             49f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
        )
        .unwrap();
        assert_eq!(super::hash160(uncompressed).to_hex(), "62E907B15CBF27D5425399EBF6F0FB50EBB88F18");
    }

    #[test]
    fn from_hex() {
        let hash = Hash160::from_hex("0x62e907b15cbf27d5425399ebf6f0fb50ebb88f18").unwrap();
        assert_eq!(hash.as_bytes()[0], 0x62);
        assert_eq!(hash.to_string(), "62E907B15CBF27D5425399EBF6F0FB50EBB88F18");
        assert_eq!(Hash160::from_hex("62e907"), Err(Error::InvalidLength { length: 3 }));
        assert_eq!(
            "62e90".parse::<Hash160>(),
            Err(Error::InvalidHex(hex::Error::OddLength))
        );
    }
}
