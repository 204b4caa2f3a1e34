//! Active calibration view.
//!
//! The single calibration in effect for measurements: a pixels-per-unit
//! factor and the unit it is expressed in. This is the value the coordinate
//! mapper consumes; the full stored record (magnification key, timestamps)
//! lives in the calibration database crate.

use serde::{Deserialize, Serialize};

use crate::error::CalibrationError;
use crate::units::{convert_rate, Unit};

/// The calibration factor currently applied to measurements
///
/// Invariant: `pixels_per_unit` is finite and strictly positive. The
/// constructor enforces this, so a held value is always usable as a divisor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveCalibration {
    pixels_per_unit: f64,
    unit: Unit,
}

impl ActiveCalibration {
    /// Create an active calibration, validating the factor.
    pub fn new(pixels_per_unit: f64, unit: Unit) -> Result<Self, CalibrationError> {
        if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
            return Err(CalibrationError::InvalidRecord(format!(
                "pixels_per_unit must be finite and positive, got {}",
                pixels_per_unit
            )));
        }
        Ok(Self {
            pixels_per_unit,
            unit,
        })
    }

    /// Pixels in the original image per one physical unit.
    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Unit the factor is expressed in.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Re-express the same physical scale in another unit. No-op when the
    /// target equals the current unit.
    pub fn with_unit(&self, target: Unit) -> Self {
        Self {
            pixels_per_unit: convert_rate(self.pixels_per_unit, self.unit, target),
            unit: target,
        }
    }
}
