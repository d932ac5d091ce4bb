use std::{error, fmt};

/// Message-carrying error for configuration and command-line failures.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Wraps a lower-level error with what was being attempted.
    pub fn context(context: impl fmt::Display, error: impl error::Error) -> Self {
        Self::new(format!("{}: {}", context, error))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::hex;

    #[test]
    fn context() {
        let error = Error::context("Invalid hash160 \"abc\"", hex::Error::OddLength);
        assert_eq!(error.message(), "Invalid hash160 \"abc\": Odd number of digits");
        assert_eq!(error.to_string(), error.message());
    }
}
