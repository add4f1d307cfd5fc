//! Error types for Surdex.

use thiserror::Error;

/// Result type alias using SurdexError.
pub type Result<T> = std::result::Result<T, SurdexError>;

/// Errors that can occur in Surdex operations.
#[derive(Debug, Error)]
pub enum SurdexError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Snapshot errors
    #[error("Snapshot corrupted at byte {offset}: {reason}")]
    SnapshotCorrupted { offset: u64, reason: String },

    // Index errors
    #[error("Index invariant violated: {0}")]
    InvariantViolation(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_conversion() {
        let io_err = IoError::new(ErrorKind::NotFound, "file not found");
        let surdex_err: SurdexError = io_err.into();
        assert!(matches!(surdex_err, SurdexError::Io(_)));
        assert!(surdex_err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_snapshot_corrupted_display() {
        let err = SurdexError::SnapshotCorrupted {
            offset: 137,
            reason: "truncated last name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Snapshot corrupted at byte 137: truncated last name"
        );
    }

    #[test]
    fn test_invariant_violation_display() {
        let err = SurdexError::InvariantViolation("red node 4 has red child 9".to_string());
        assert_eq!(
            err.to_string(),
            "Index invariant violated: red node 4 has red child 9"
        );
    }

    #[test]
    fn test_config_errors_display() {
        let err = SurdexError::ConfigError("missing data_file".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing data_file");

        let err = SurdexError::InvalidParameter {
            name: "benchmark_samples".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter: benchmark_samples = 0");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(SurdexError::ConfigError("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SurdexError>();
    }
}
