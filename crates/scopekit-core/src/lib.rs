//! # ScopeKit Core
//!
//! Core types and utilities for ScopeKit: physical units and conversion,
//! the shared error taxonomy, engine constants, and the event bus that
//! distributes calibration changes to their consumers.

pub mod calibration;
pub mod constants;
pub mod error;
pub mod event_bus;
pub mod units;

pub use calibration::ActiveCalibration;
pub use error::{CalibrationError, Error, Result};
pub use units::{convert_rate, convert_value, format_value, Unit};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, CalibrationEvent, EventBus, EventBusError, EventCategory, EventFilter, StoreEvent,
    SubscriptionId,
};
