use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Invalid character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

/// Digit symbols of a radix-`N` positional representation.
///
/// Decoding is case sensitive unless built with [`Alphabet::with_lowercase`].
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    /// Symbol of the digit zero.
    pub fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { index, character: value });
        }
        match self.decode[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(v) = decode[characters[index] as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Also accept the lowercase form of every uppercase character.
    pub const fn with_lowercase(mut self) -> Self {
        let mut index = 0;
        while index < N {
            let character = self.encode[index];
            if character.is_ascii_uppercase() {
                self.decode[character.to_ascii_lowercase() as usize] = Some(index as u8);
            }
            index += 1;
        }
        self
    }

    /// The radix.
    pub const fn len(&self) -> usize {
        self.encode.len()
    }
}
