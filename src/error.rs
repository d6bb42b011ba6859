//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when editing records in the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A phone number failed format validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not in the record
    #[error("Phone number not found: {0}")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::NotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Phone number not found: 1234567890");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_LOG_LEVEL: unknown level"
        );
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AddressBookError = ValidationError::InvalidPhone("1".to_string()).into();
        assert!(matches!(err, AddressBookError::Validation(_)));
        assert_eq!(err.to_string(), "Phone number must contain 10 digits: 1");
    }
}
