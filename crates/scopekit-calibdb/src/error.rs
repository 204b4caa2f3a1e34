//! Error types for the calibration database crate.
//!
//! Persistence failures and validation failures are kept apart: a store
//! error never implies the in-memory state changed, and a validation error
//! never implies the store was touched.

use std::io;
use thiserror::Error;

use scopekit_core::CalibrationError;

/// Errors from the persistence backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to load records from storage.
    #[error("Failed to load calibrations: {0}")]
    Load(String),

    /// Failed to save records to storage.
    #[error("Failed to save calibrations: {0}")]
    Save(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from calibration management operations.
#[derive(Error, Debug)]
pub enum CalibDbError {
    /// The persistence backend failed; in-memory state is unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The operation was rejected by validation; nothing was mutated.
    #[error(transparent)]
    Calibration(#[from] CalibrationError),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for calibration management operations.
pub type CalibDbResult<T> = Result<T, CalibDbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Load("corrupted JSON".to_string());
        assert_eq!(err.to_string(), "Failed to load calibrations: corrupted JSON");

        let err = StoreError::Save("disk full".to_string());
        assert_eq!(err.to_string(), "Failed to save calibrations: disk full");
    }

    #[test]
    fn test_error_conversion() {
        let store_err = StoreError::Load("x".to_string());
        let err: CalibDbError = store_err.into();
        assert!(matches!(err, CalibDbError::Store(_)));

        let cal_err = CalibrationError::NotFound("40x".to_string());
        let err: CalibDbError = cal_err.into();
        assert!(matches!(err, CalibDbError::Calibration(_)));
    }
}
