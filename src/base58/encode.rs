use super::{Alphabet, ALPHABET};
use crate::{hex, Magnitude};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The hex input does not describe a whole number of bytes.
    OddLength,
    InvalidHexCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OddLength => write!(f, "Uneven number of hex characters"),
            Error::InvalidHexCharacter { character, index } => write!(f, "Invalid hex character {:?} at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

impl From<hex::Error> for Error {
    fn from(error: hex::Error) -> Self {
        match error {
            hex::Error::OddLength => Error::OddLength,
            hex::Error::InvalidHexCharacter { character, index } => Error::InvalidHexCharacter { character, index },
            hex::Error::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Encodes a hex digit string. Each leading `"00"` pair becomes one zero symbol.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let input = input.as_ref();
        if input.len() % 2 != 0 {
            return Err(Error::OddLength);
        }
        let zeros = input.chunks(2).take_while(|&pair| pair == b"00").count();
        Ok(self.render(Magnitude::from_hex(input)?, zeros))
    }

    /// Same as [`Encoder::encode`] for input that is already binary.
    pub fn encode_bytes(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let zeros = input.iter().take_while(|&&value| value == 0).count();
        self.render(Magnitude::from_bytes(input), zeros)
    }

    fn render(&self, magnitude: Magnitude, zeros: usize) -> String {
        let digits = magnitude.into_digits(self.alphabet.len());
        let mut output = String::with_capacity(zeros + digits.len());
        for _ in 0..zeros {
            output.push(char::from(self.alphabet.zero()));
        }
        for digit in digits {
            output.push(char::from(self.alphabet.encode(digit as usize)));
        }
        output
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Encoder::default().encode(input)
}

pub fn encode_bytes(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode_bytes(input)
}
