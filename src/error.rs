//! Custom error types for the contacts book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contacts book operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Name was empty or only whitespace
    #[error("Name required!")]
    InvalidName,

    /// Email did not match the accepted pattern
    #[error("Invalid email '{value}': expected one '@', a '.' after it and no spaces")]
    InvalidEmail { value: String },

    /// Phone was not all digits or had the wrong length
    #[error("Invalid phone '{value}': expected {min}-{max} digits only")]
    InvalidPhone {
        value: String,
        min: usize,
        max: usize,
    },

    /// Update or delete referenced a position that does not exist
    #[error("No contact at position {index} (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Standard input reached end of file
    #[error("Input closed")]
    InputClosed,
}

impl ContactsError {
    /// Create an out-of-range error for a store of `len` contacts
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidName | Self::InvalidEmail { .. } | Self::InvalidPhone { .. }
        )
    }

    /// Check if this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            return Self::InputClosed;
        }
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contacts book operations
pub type ContactsResult<T> = Result<T, ContactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactsError::Config("bad bounds".into());
        assert_eq!(err.to_string(), "Configuration error: bad bounds");
    }

    #[test]
    fn test_out_of_range_error() {
        let err = ContactsError::out_of_range(4, 2);
        assert_eq!(err.to_string(), "No contact at position 4 (store holds 2)");
        assert!(err.is_out_of_range());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_phone_error_mentions_bounds() {
        let err = ContactsError::InvalidPhone {
            value: "12ab".into(),
            min: 7,
            max: 15,
        };
        assert!(err.to_string().contains("7-15 digits"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ContactsError = io_err.into();
        assert!(matches!(err, ContactsError::Io(_)));

        let eof = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: ContactsError = eof.into();
        assert!(matches!(err, ContactsError::InputClosed));
    }
}
