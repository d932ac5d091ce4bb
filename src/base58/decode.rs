use super::{Alphabet, ALPHABET};
use crate::base_common::alphabet::DecodeError;
use crate::{hex, Magnitude};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Every character is checked before any arithmetic, so a bad symbol anywhere yields
    /// an error and never a partial value. Returns the count of leading zero symbols and
    /// the magnitude of the whole string.
    fn read(&self, input: &[u8]) -> Result<(usize, Magnitude), Error> {
        let digits = input
            .iter()
            .enumerate()
            .map(|(index, &character)| self.alphabet.decode(character, index))
            .collect::<Result<Vec<u8>, _>>()?;
        let zeros = digits.iter().take_while(|&&digit| digit == 0).count();
        Ok((zeros, Magnitude::from_digits(digits, self.alphabet.len())))
    }

    /// Decodes to an even-length uppercase hex digit string.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<String, Error> {
        let (zeros, magnitude) = self.read(input.as_ref())?;
        Ok("00".repeat(zeros) + &hex::pad_even(magnitude.to_hex()))
    }

    pub fn decode_bytes(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let (zeros, magnitude) = self.read(input.as_ref())?;
        let mut output = vec![0u8; zeros];
        output.extend(magnitude.to_bytes());
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Decoder::default().decode(input)
}

pub fn decode_bytes(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode_bytes(input)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok("".to_string()));
        assert_eq!(super::decode("2g"), Ok("61".to_string()));
        assert_eq!(super::decode("a3gV"), Ok("626262".to_string()));
        assert_eq!(super::decode("ABnLTmg"), Ok("516B6FCD0F".to_string()));
        assert_eq!(super::decode("Rt5zm"), Ok("10C8511E".to_string()));
        assert_eq!(
            super::decode("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            Ok("0062E907B15CBF27D5425399EBF6F0FB50EBB88F18C29B7D93".to_string())
        );
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(super::decode("1"), Ok("00".to_string()));
        assert_eq!(super::decode("115Q"), Ok("0000FF".to_string()));
        assert_eq!(super::decode("1111111111"), Ok("00000000000000000000".to_string()));
        assert_eq!(super::decode("11C3CPq7c8PY"), Ok("00000123456789ABCDEF".to_string()));
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert_eq!(super::decode("1A0z"), Err(Error::InvalidCharacter { character: '0', index: 2 }));
        assert_eq!(super::decode("O"), Err(Error::InvalidCharacter { character: 'O', index: 0 }));
        assert_eq!(super::decode("zzI"), Err(Error::InvalidCharacter { character: 'I', index: 2 }));
        assert_eq!(super::decode("l111"), Err(Error::InvalidCharacter { character: 'l', index: 0 }));
        assert_eq!(super::decode("1 2"), Err(Error::InvalidCharacter { character: ' ', index: 1 }));
        assert_eq!(
            super::decode("2é"),
            Err(Error::NonAsciiCharacter { character: 0xc3, index: 1 })
        );
    }

    #[test]
    fn decode_bytes() {
        assert_eq!(super::decode_bytes("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(super::decode_bytes("1111"), Ok(vec![0, 0, 0, 0]));
        assert_eq!(super::decode_bytes("115Q"), Ok(vec![0x00, 0x00, 0xff]));
    }
}
