//! Error types for flightlog.
//!
//! This module defines all error types used throughout the flightlog crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::ValidationError;

/// The main error type for flightlog operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to read the data file.
    #[error("failed to read flight data from {path}: {source}")]
    StoreRead {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the data file.
    #[error("failed to write flight data to {path}: {source}")]
    StoreWrite {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a JSON array.
    #[error("flight data in {path} is not valid JSON: {source}")]
    StoreParse {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// An entry of the data file does not have the flight record shape.
    #[error("flight data in {path} has an invalid record at index {index}: {source}")]
    InvalidRecord {
        /// Path to the data file.
        path: PathBuf,
        /// Position of the entry in the array.
        index: usize,
        /// The shape violation.
        #[source]
        source: ValidationError,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Console Errors ===
    /// The operator input stream closed before the exit action.
    #[error("input closed before the exit action; unsaved flights were discarded")]
    InputClosed,

    // === I/O Errors ===
    /// File system or console operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flightlog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the operator input ended early.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }

    /// Check if this error comes from a broken data file.
    #[must_use]
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::StoreParse { .. } | Self::InvalidRecord { .. })
    }

    /// One-line report for the operator, with a hint where one helps.
    #[must_use]
    pub fn report(&self) -> String {
        if self.is_corrupt_data() {
            format!("Error: {self}\nFix or move the data file; it is left untouched.")
        } else {
            format!("Error: {self}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InputClosed;
        assert!(err.to_string().contains("input closed"));

        let err = Error::config_validation("data_file must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid configuration: data_file must not be empty"
        );
    }

    #[test]
    fn test_is_input_closed() {
        assert!(Error::InputClosed.is_input_closed());
        assert!(!Error::config_validation("x").is_input_closed());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_store_read_error_display() {
        let err = Error::StoreRead {
            path: PathBuf::from("/data/flights.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/flights.json"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_store_parse_error_is_corrupt() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::StoreParse {
            path: PathBuf::from("flights.json"),
            source,
        };
        assert!(err.is_corrupt_data());
        assert!(err.to_string().contains("flights.json"));
    }

    #[test]
    fn test_invalid_record_error_display() {
        let err = Error::InvalidRecord {
            path: PathBuf::from("flights.json"),
            index: 3,
            source: ValidationError::MissingField {
                field: crate::flight::FLIGHT_NUMBER_KEY,
            },
        };
        let msg = err.to_string();
        assert!(err.is_corrupt_data());
        assert!(msg.contains("index 3"));
        assert!(msg.contains("номер рейса"));
    }

    #[test]
    fn test_report_uses_display() {
        assert_eq!(
            Error::InputClosed.report(),
            "Error: input closed before the exit action; unsaved flights were discarded"
        );
        assert!(!Error::InputClosed.report().contains("InputClosed"));
    }

    #[test]
    fn test_report_hints_on_corrupt_data() {
        let source = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let report = Error::StoreParse {
            path: PathBuf::from("flights.json"),
            source,
        }
        .report();
        assert!(report.starts_with("Error: flight data in flights.json"));
        assert!(report.contains("Fix or move the data file"));
        assert_eq!(report.lines().count(), 2);
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
        assert!(!err.is_corrupt_data());
    }
}
