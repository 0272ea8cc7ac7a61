//! Error handling for StandKit
//!
//! This module defines the error types shared across the workspace. Typed
//! errors are used for dimension input handling, and a unified [`Error`]
//! wraps them for APIs that can fail in more than one way.

use thiserror::Error;

/// Errors produced while converting dimension text into millimeters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DimensionParseError {
    /// The input was not a valid decimal number
    #[error("Invalid number '{input}': {reason}")]
    InvalidNumber {
        /// The raw input text
        input: String,
        /// Why parsing failed
        reason: String,
    },

    /// A fractional-inch input was malformed
    #[error("Invalid fraction '{input}': expected forms like \"3/8\" or \"1 1/2\"")]
    InvalidFraction {
        /// The raw input text
        input: String,
    },

    /// A fraction had a zero denominator
    #[error("Zero denominator in fraction '{input}'")]
    ZeroDenominator {
        /// The raw input text
        input: String,
    },
}

/// Main error type for StandKit
#[derive(Error, Debug)]
pub enum Error {
    /// Dimension text could not be parsed
    #[error(transparent)]
    DimensionParse(#[from] DimensionParseError),

    /// Generic error with a message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a generic error from any displayable message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Returns true when the error came from dimension parsing
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::DimensionParse(_))
    }
}

/// Result type alias for StandKit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = DimensionParseError::InvalidNumber {
            input: "abc".to_string(),
            reason: "invalid float literal".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid number 'abc': invalid float literal");
    }

    #[test]
    fn test_error_from_parse_error() {
        let parse = DimensionParseError::InvalidFraction {
            input: "1/2/3".to_string(),
        };
        let err: Error = parse.clone().into();
        assert!(err.is_parse_error());
        assert_eq!(err.to_string(), parse.to_string());
    }

    #[test]
    fn test_other_error() {
        let err = Error::other("something went wrong");
        assert!(!err.is_parse_error());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
