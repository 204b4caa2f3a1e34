//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable summaries; they carry the scalar
//! facts of a change, not references into live state.

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// Root event enum for all engine events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Active-calibration changes
    Calibration(CalibrationEvent),
    /// Stored-record changes
    Store(StoreEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Calibration(_) => EventCategory::Calibration,
            AppEvent::Store(_) => EventCategory::Store,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Calibration(e) => e.description(),
            AppEvent::Store(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Active-calibration events.
    Calibration,
    /// Stored-record events.
    Store,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Calibration => write!(f, "Calibration"),
            EventCategory::Store => write!(f, "Store"),
        }
    }
}

/// Changes to the calibration in effect for measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalibrationEvent {
    /// A different calibration factor is now active.
    ActiveChanged {
        /// Magnification key of the now-active record.
        magnification: String,
        /// Unit the factor is expressed in.
        unit: Unit,
        /// Pixels per unit of the now-active record.
        pixels_per_unit: f64,
    },
    /// No calibration is active; measurements fall back to pixel values.
    ActiveCleared,
}

impl CalibrationEvent {
    fn description(&self) -> String {
        match self {
            CalibrationEvent::ActiveChanged {
                magnification,
                unit,
                pixels_per_unit,
            } => format!(
                "Active calibration: {} ({:.4} px/{})",
                magnification, pixels_per_unit, unit
            ),
            CalibrationEvent::ActiveCleared => "Active calibration cleared".to_string(),
        }
    }
}

/// Changes to the set of stored calibration records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
    /// A record was created or overwritten.
    RecordSaved {
        /// Magnification key of the saved record.
        magnification: String,
    },
    /// A record was deleted.
    RecordDeleted {
        /// Magnification key of the deleted record.
        magnification: String,
    },
}

impl StoreEvent {
    fn description(&self) -> String {
        match self {
            StoreEvent::RecordSaved { magnification } => {
                format!("Calibration saved for {}", magnification)
            }
            StoreEvent::RecordDeleted { magnification } => {
                format!("Calibration deleted for {}", magnification)
            }
        }
    }
}
