//! Reference-line calibration workflow.
//!
//! The operator draws a line of known real-world length on a reference
//! image, then enters that length and a unit. The workflow validates both
//! sides, derives pixels-per-unit, and hands the record to the manager. Any
//! rejection leaves everything — workflow state, stored records, active
//! calibration — exactly as it was.

use scopekit_core::constants::{
    MAX_PIXELS_PER_UNIT, MIN_PIXELS_PER_UNIT, MIN_REFERENCE_PIXELS,
};
use scopekit_core::{CalibrationError, Unit};

use crate::error::CalibDbResult;
use crate::manager::CalibrationManager;
use crate::model::CalibrationRecord;

/// Workflow progress.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    /// Waiting for the operator to draw the reference line.
    AwaitingReferenceLine,
    /// Reference captured; waiting for the known measurement value.
    AwaitingMeasurementValue {
        /// Reference length in original-image pixels.
        pixel_length: f64,
    },
    /// Calibration derived and activated.
    Calibrated {
        /// Magnification the derived record was stored under.
        magnification: String,
    },
}

/// The reference-line-then-known-value calibration procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationWorkflow {
    state: WorkflowState,
}

impl CalibrationWorkflow {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::AwaitingReferenceLine,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Capture the drawn reference line's pixel length (original-image
    /// space). Redrawing the line at any stage restarts from here.
    pub fn set_reference_line(&mut self, pixel_length: f64) -> Result<(), CalibrationError> {
        if !pixel_length.is_finite() || pixel_length < MIN_REFERENCE_PIXELS {
            return Err(CalibrationError::ReferenceTooShort {
                pixel_length,
                minimum: MIN_REFERENCE_PIXELS,
            });
        }
        self.state = WorkflowState::AwaitingMeasurementValue { pixel_length };
        Ok(())
    }

    /// Submit the known measurement. On success the derived record is
    /// upserted for `magnification`, made active, and published; on any
    /// failure the workflow stays where it was and the manager is untouched.
    pub fn submit(
        &mut self,
        manager: &mut CalibrationManager,
        value: f64,
        unit: Unit,
        magnification: impl Into<String>,
        name: Option<String>,
    ) -> CalibDbResult<CalibrationRecord> {
        let WorkflowState::AwaitingMeasurementValue { pixel_length } = self.state else {
            return Err(CalibrationError::NoReferenceLine.into());
        };
        if !value.is_finite() || value <= 0.0 {
            return Err(CalibrationError::NonPositiveValue { value }.into());
        }

        let factor = pixel_length / value;
        if !(MIN_PIXELS_PER_UNIT..=MAX_PIXELS_PER_UNIT).contains(&factor) {
            return Err(CalibrationError::FactorOutOfRange {
                factor,
                min: MIN_PIXELS_PER_UNIT,
                max: MAX_PIXELS_PER_UNIT,
            }
            .into());
        }

        let magnification = magnification.into();
        let mut record = CalibrationRecord::new(magnification.clone(), unit, factor);
        if let Some(name) = name {
            record = record.with_name(name);
        }

        // Persist before anything becomes visible; a store failure aborts
        // with the previous calibration still in effect.
        manager.upsert(record.clone())?;
        manager.set_active(record.clone())?;

        tracing::info!(
            %magnification,
            pixels_per_unit = factor,
            unit = %unit,
            "calibration derived"
        );
        self.state = WorkflowState::Calibrated { magnification };
        Ok(record)
    }

    /// Abandon the procedure and start over.
    pub fn cancel(&mut self) {
        self.state = WorkflowState::AwaitingReferenceLine;
    }
}

impl Default for CalibrationWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
