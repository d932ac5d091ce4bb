use crate::{Error, Version};
use std::{env, fmt::Display};

#[derive(Debug, Clone)]
pub struct Configuration {
    address_version: Version,
    max_address_version: Version,
    log_interval: usize,
    quiet: bool,
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Option<String>) -> Result<String, Error> {
    match lookup(key) {
        Some(value) => Ok(value),
        None => default.ok_or_else(|| Error::new(format!("Missing {}", key))),
    }
}

fn var_map<T, E: Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    mut f: impl FnMut(&str) -> Result<T, E>,
    default: Option<T>,
) -> Result<T, Error> {
    match var(lookup, key, None) {
        Ok(value) => f(&value).map_err(|error| Error::new(format!("Invalid {} {} ({})", key, value, error))),
        Err(err) => default.ok_or(err),
    }
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err("expected a boolean".to_string()),
    }
}

impl Configuration {
    /// Reads `ADDRESS_VERSION`, `MAX_ADDRESS_VERSION`, `LOG_INTERVAL` and `QUIET` from the environment.
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let address_version = var_map(&lookup, "ADDRESS_VERSION", Version::from_hex, Some(Version::MAINNET))?;
        let max_address_version = var_map(&lookup, "MAX_ADDRESS_VERSION", Version::from_hex, Some(address_version))?;
        let log_interval = var_map(
            &lookup,
            "LOG_INTERVAL",
            |interval| match interval.parse::<usize>() {
                Ok(0) => Err("must be positive".to_string()),
                Ok(interval) => Ok(interval),
                Err(error) => Err(error.to_string()),
            },
            Some(1000),
        )?;
        let quiet = var_map(&lookup, "QUIET", parse_flag, Some(false))?;
        Ok(Self {
            address_version,
            max_address_version,
            log_interval,
            quiet,
        })
    }

    pub fn address_version(&self) -> Version {
        self.address_version
    }

    pub fn max_address_version(&self) -> Version {
        self.max_address_version
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use crate::Version;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Configuration, crate::Error> {
        let vars: HashMap<String, String> = pairs.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        Configuration::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = load(&[]).unwrap();
        assert_eq!(configuration.address_version(), Version::MAINNET);
        assert_eq!(configuration.max_address_version(), Version::MAINNET);
        assert_eq!(configuration.log_interval(), 1000);
        assert!(!configuration.quiet());
    }

    #[test]
    fn max_version_follows_address_version() {
        let configuration = load(&[("ADDRESS_VERSION", "6f")]).unwrap();
        assert_eq!(configuration.address_version(), Version::new(0x6f));
        assert_eq!(configuration.max_address_version(), Version::new(0x6f));

        let configuration = load(&[("MAX_ADDRESS_VERSION", "0x05"), ("QUIET", "true"), ("LOG_INTERVAL", "10")]).unwrap();
        assert_eq!(configuration.address_version(), Version::MAINNET);
        assert_eq!(configuration.max_address_version(), Version::new(0x05));
        assert_eq!(configuration.log_interval(), 10);
        assert!(configuration.quiet());
    }

    #[test]
    fn invalid_values() {
        let error = load(&[("ADDRESS_VERSION", "100")]).unwrap_err();
        assert_eq!(error.message(), "Invalid ADDRESS_VERSION 100 (Version must be a single hex byte)");
        assert!(load(&[("LOG_INTERVAL", "0")]).is_err());
        assert!(load(&[("LOG_INTERVAL", "ten")]).is_err());
        assert!(load(&[("QUIET", "maybe")]).is_err());
    }
}
