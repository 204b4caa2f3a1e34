//! Calibration record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scopekit_core::units::convert_rate;
use scopekit_core::{ActiveCalibration, CalibrationError, Unit};

/// A stored calibration: pixels per physical unit for one magnification.
///
/// Records are keyed by magnification; the store holds at most one per key
/// (last write wins). `pixels_per_unit` is validated strictly positive and
/// finite before a record is accepted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    /// Magnification key, e.g. "10x", "1000x".
    pub magnification: String,
    /// Optional operator-facing label for the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit the factor is expressed in.
    pub unit: Unit,
    /// Pixels in the original image per one physical unit.
    pub pixels_per_unit: f64,
    /// When this record was derived.
    pub created_at: DateTime<Utc>,
}

impl CalibrationRecord {
    pub fn new(magnification: impl Into<String>, unit: Unit, pixels_per_unit: f64) -> Self {
        Self {
            magnification: magnification.into(),
            name: None,
            unit,
            pixels_per_unit,
            created_at: Utc::now(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Structural validation: non-empty key, finite positive factor.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if self.magnification.trim().is_empty() {
            return Err(CalibrationError::InvalidRecord(
                "magnification must not be empty".to_string(),
            ));
        }
        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            return Err(CalibrationError::InvalidRecord(format!(
                "pixels_per_unit must be finite and positive, got {}",
                self.pixels_per_unit
            )));
        }
        Ok(())
    }

    /// The mapper-facing view of this record.
    pub fn scale(&self) -> Result<ActiveCalibration, CalibrationError> {
        ActiveCalibration::new(self.pixels_per_unit, self.unit)
    }

    /// Re-express the same physical calibration in another unit. A no-op
    /// when the target equals the current unit; invertible otherwise.
    pub fn with_unit(&self, target: Unit) -> Self {
        if target == self.unit {
            return self.clone();
        }
        Self {
            pixels_per_unit: convert_rate(self.pixels_per_unit, self.unit, target),
            unit: target,
            ..self.clone()
        }
    }
}
