pub mod address;
pub mod amount;
pub mod base58;
pub mod base58_check;
pub mod base_common;
pub mod chronometer;
pub mod command;
pub mod configuration;
pub mod error;
pub mod hash160;
pub mod hashing;
pub mod hex;
pub mod logger;
pub mod magnitude;

pub use self::{
    address::{Address, UncheckedAddress, Version},
    chronometer::Chronometer,
    configuration::Configuration,
    error::Error,
    hash160::Hash160,
    logger::{Logger, PartialLogger},
    magnitude::Magnitude,
};
