use crate::base_common::{alphabet::DecodeError, Alphabet};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidHexCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidHexCharacter { character, index } => {
                write!(f, "Invalid character {:?} at position {}", character, index)
            }
            Error::NonAsciiCharacter { character, index } => {
                write!(f, "Non-ascii character {:#04x} at position {}", character, index)
            }
            Error::OddLength => write!(f, "Odd number of digits"),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::InvalidCharacter { character, index } => Error::InvalidHexCharacter { character, index },
            DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

/// Uppercase is canonical; lowercase digits are accepted on input.
pub const ALPHABET: Alphabet<16> = match Alphabet::new(b"0123456789ABCDEF") {
    Ok(alphabet) => alphabet.with_lowercase(),
    Err(_) => panic!("Could not build alphabet"),
};

/// Digit value of the hex character at `index`.
pub fn value(character: u8, index: usize) -> Result<u8, Error> {
    Ok(ALPHABET.decode(character, index)?)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    if input.len() % 2 != 0 {
        return Err(Error::OddLength);
    }
    let mut output = Vec::with_capacity(input.len() / 2);
    for (i, pair) in input.chunks(2).enumerate() {
        output.push(value(pair[0], 2 * i)? << 4 | value(pair[1], 2 * i + 1)?);
    }
    Ok(output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push(char::from(ALPHABET.encode((byte >> 4) as usize)));
        output.push(char::from(ALPHABET.encode((byte & 0x0F) as usize)));
    }
    output
}

/// Drops a leading `0x` or `0X`.
pub fn strip_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Left-pads with a single `0` when the digit count is odd.
pub fn pad_even(mut digits: String) -> String {
    if digits.len() % 2 != 0 {
        digits.insert(0, '0');
    }
    digits
}
