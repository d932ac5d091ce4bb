//! Base-58 rendering of big-endian magnitudes.
//!
//! Both directions work on hex digit strings: base 58 has no symbol that can carry a
//! significant leading zero, so every leading zero byte (`"00"` in hex) is written as one
//! leading `'1'` and every leading `'1'` decodes back to one zero byte.

pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::{decode, decode_bytes, Decoder};
pub use encode::{encode, encode_bytes, Encoder};

/// Digits and letters without `0`, `O`, `I` and `l`.
pub const ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
