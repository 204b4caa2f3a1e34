//! Error handling for ScopeKit
//!
//! Provides the error types shared across the workspace:
//! - Calibration errors (validation of the reference-line procedure)
//! - The umbrella [`Error`] type used at crate boundaries
//!
//! All error types use `thiserror` for ergonomic error handling. Validation
//! errors are rejections: the operation reports a reason and mutates nothing.

use thiserror::Error;

/// Calibration validation error
///
/// Raised when the reference-line workflow or a stored record fails
/// validation. The calibration state in effect before the failing operation
/// is always left unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// Reference line is too short to derive a trustworthy factor
    #[error("Reference line too short: {pixel_length:.1} px (minimum {minimum:.0} px)")]
    ReferenceTooShort {
        /// Measured length of the drawn reference line, in pixels.
        pixel_length: f64,
        /// Minimum accepted reference length, in pixels.
        minimum: f64,
    },

    /// Entered measurement value must be strictly positive
    #[error("Measurement value must be positive, got {value}")]
    NonPositiveValue {
        /// The rejected value.
        value: f64,
    },

    /// Derived factor falls outside the plausible range
    #[error("Derived factor {factor:.4} px/unit outside plausible range [{min}, {max}]")]
    FactorOutOfRange {
        /// The derived pixels-per-unit factor.
        factor: f64,
        /// Lower bound of the accepted range.
        min: f64,
        /// Upper bound of the accepted range.
        max: f64,
    },

    /// A measurement value was submitted before a reference line was captured
    #[error("No reference line has been captured")]
    NoReferenceLine,

    /// No stored calibration exists for the requested magnification
    #[error("No calibration stored for magnification {0}")]
    NotFound(String),

    /// A record failed structural validation
    #[error("Invalid calibration record: {0}")]
    InvalidRecord(String),
}

/// Umbrella error type
#[derive(Error, Debug)]
pub enum Error {
    /// Calibration validation error
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from any displayable value.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias using the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
