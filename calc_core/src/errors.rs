//! # Error Types
//!
//! Structured error types for calc_core. Calculator input never fails loudly:
//! the engine turns a [`CalcError::DomainError`] into the `"Error"` display
//! state. The other variants surface from parsing action names and from the
//! preferences file.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_ln(value: f64) -> CalcResult<f64> {
//!     if value <= 0.0 {
//!         return Err(CalcError::domain_error("ln", value.to_string()));
//!     }
//!     Ok(value.ln())
//! }
//!
//! assert!(checked_ln(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (not a digit, unknown action name, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A function was applied outside its mathematical domain
    #[error("Domain error: {function} is undefined for {value}")]
    DomainError { function: String, value: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DomainError
    pub fn domain_error(function: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::DomainError {
            function: function.into(),
            value: value.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::domain_error("arcsin", "2");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::domain_error("ln", "0").error_code(), "DOMAIN_ERROR");
        assert_eq!(
            CalcError::invalid_input("digit", "x", "not a digit").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_error_message() {
        let error = CalcError::domain_error("ln", "-3");
        assert_eq!(error.to_string(), "Domain error: ln is undefined for -3");
    }
}
