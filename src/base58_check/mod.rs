//! Base58Check: base 58 over `payload ‖ checksum`.

mod checksum;
pub mod encode;

pub use checksum::{compute_checksum, verify_checksum, CHECKSUM_LENGTH};
pub use encode::{encode, Encoder};
