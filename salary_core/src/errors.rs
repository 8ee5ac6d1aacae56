//! # Error Types
//!
//! Structured error types for salary_core. These cover the loading side of the
//! crate: reading dataset files, validating records, and configuration.
//!
//! The calculation functions never return these. A key that does not resolve
//! is reported as `None`, and degenerate arithmetic is guarded in place.
//!
//! ## Example
//!
//! ```rust
//! use salary_core::errors::{SalaryError, SalaryResult};
//!
//! fn check_rate(code: &str, exchange_rate: f64) -> SalaryResult<()> {
//!     if exchange_rate <= 0.0 {
//!         return Err(SalaryError::invalid_record(
//!             "countries",
//!             code,
//!             "exchangeRate must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rate("US", 1.0).is_ok());
//! assert_eq!(check_rate("XX", 0.0).unwrap_err().error_code(), "INVALID_RECORD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for salary_core loading operations
pub type SalaryResult<T> = Result<T, SalaryError>;

/// Structured error type for dataset loading and validation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SalaryError {
    /// A record carries an out-of-range or malformed value
    #[error("Invalid record in '{collection}' ({key}): {reason}")]
    InvalidRecord {
        collection: String,
        key: String,
        reason: String,
    },

    /// Two records share the same key
    #[error("Duplicate key in '{collection}': {key}")]
    DuplicateKey { collection: String, key: String },

    /// A record points at an entity that is not in the dataset
    #[error("Unknown reference in '{collection}' ({key}): no {target} '{reference}'")]
    UnknownReference {
        collection: String,
        key: String,
        target: String,
        reference: String,
    },

    /// A dataset file is absent from the source
    #[error("Missing dataset file: {file}")]
    MissingFile { file: String },

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

    /// Dataset schema version mismatch
    #[error("Version mismatch: dataset version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Configuration value could not be used
    #[error("Invalid configuration '{setting}': {reason}")]
    InvalidConfig { setting: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SalaryError {
    /// Create an InvalidRecord error
    pub fn invalid_record(
        collection: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SalaryError::InvalidRecord {
            collection: collection.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a DuplicateKey error
    pub fn duplicate_key(collection: impl Into<String>, key: impl Into<String>) -> Self {
        SalaryError::DuplicateKey {
            collection: collection.into(),
            key: key.into(),
        }
    }

    /// Create an UnknownReference error
    pub fn unknown_reference(
        collection: impl Into<String>,
        key: impl Into<String>,
        target: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        SalaryError::UnknownReference {
            collection: collection.into(),
            key: key.into(),
            target: target.into(),
            reference: reference.into(),
        }
    }

    /// Create a MissingFile error
    pub fn missing_file(file: impl Into<String>) -> Self {
        SalaryError::MissingFile { file: file.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SalaryError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        SalaryError::InvalidConfig {
            setting: setting.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the dataset contents rather than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            SalaryError::InvalidRecord { .. }
                | SalaryError::DuplicateKey { .. }
                | SalaryError::UnknownReference { .. }
                | SalaryError::VersionMismatch { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SalaryError::InvalidRecord { .. } => "INVALID_RECORD",
            SalaryError::DuplicateKey { .. } => "DUPLICATE_KEY",
            SalaryError::UnknownReference { .. } => "UNKNOWN_REFERENCE",
            SalaryError::MissingFile { .. } => "MISSING_FILE",
            SalaryError::FileError { .. } => "FILE_ERROR",
            SalaryError::SerializationError { .. } => "SERIALIZATION_ERROR",
            SalaryError::VersionMismatch { .. } => "VERSION_MISMATCH",
            SalaryError::InvalidConfig { .. } => "INVALID_CONFIG",
            SalaryError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for SalaryError {
    fn from(e: serde_json::Error) -> Self {
        SalaryError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SalaryError::unknown_reference("salaries", "nurse/ZZ", "country", "ZZ");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownReference\""));
        let roundtrip: SalaryError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SalaryError::missing_file("cities.json").error_code(), "MISSING_FILE");
        assert_eq!(SalaryError::duplicate_key("countries", "US").error_code(), "DUPLICATE_KEY");
        assert_eq!(
            SalaryError::invalid_config("SALARY_DATA_DIR", "empty").error_code(),
            "INVALID_CONFIG"
        );
    }

    #[test]
    fn test_data_error_classification() {
        assert!(SalaryError::duplicate_key("cities", "paris").is_data_error());
        assert!(!SalaryError::file_error("read", "/tmp/x", "denied").is_data_error());
    }

    #[test]
    fn test_display_message() {
        let error = SalaryError::invalid_record("bigmac", "JP", "dollarPrice must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid record in 'bigmac' (JP): dollarPrice must be positive"
        );
    }
}
