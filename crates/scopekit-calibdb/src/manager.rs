//! Calibration manager: cached records plus the active calibration.
//!
//! Mutations persist first and update the cache only after the store
//! acknowledges, so a persistence failure leaves the in-memory state exactly
//! as it was. Change notifications go out through an injected event bus;
//! [`set_active`](CalibrationManager::set_active) publishes only when the
//! active record actually changed, so a listener echoing the value back
//! cannot start a republish loop.

use std::collections::HashMap;
use std::sync::Arc;

use scopekit_core::{
    ActiveCalibration, AppEvent, CalibrationError, CalibrationEvent, EventBus, StoreEvent,
};

use crate::error::CalibDbResult;
use crate::model::CalibrationRecord;
use crate::store::CalibrationStore;

pub struct CalibrationManager {
    store: Box<dyn CalibrationStore>,
    records: HashMap<String, CalibrationRecord>,
    active: Option<CalibrationRecord>,
    bus: Option<Arc<EventBus>>,
}

impl CalibrationManager {
    /// Create a manager over a persistence backend, loading its records.
    pub fn new(store: Box<dyn CalibrationStore>) -> CalibDbResult<Self> {
        let records = store.list()?;
        tracing::info!(count = records.len(), "calibration records loaded");
        Ok(Self {
            store,
            records,
            active: None,
            bus: None,
        })
    }

    /// Attach the event bus change notifications are published on.
    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Create or overwrite the record for its magnification.
    pub fn upsert(&mut self, record: CalibrationRecord) -> CalibDbResult<()> {
        record.validate()?;
        self.store.save(&record)?;
        let magnification = record.magnification.clone();
        self.records.insert(magnification.clone(), record);
        self.publish(AppEvent::Store(StoreEvent::RecordSaved { magnification }));
        Ok(())
    }

    pub fn get(&self, magnification: &str) -> Option<&CalibrationRecord> {
        self.records.get(magnification)
    }

    pub fn list(&self) -> &HashMap<String, CalibrationRecord> {
        &self.records
    }

    /// Delete the record for a magnification. Clears the active calibration
    /// if it was derived from that record.
    pub fn delete(&mut self, magnification: &str) -> CalibDbResult<()> {
        if !self.records.contains_key(magnification) {
            return Err(CalibrationError::NotFound(magnification.to_string()).into());
        }
        self.store.delete(magnification)?;
        self.records.remove(magnification);
        if self
            .active
            .as_ref()
            .is_some_and(|a| a.magnification == magnification)
        {
            self.active = None;
            self.publish(AppEvent::Calibration(CalibrationEvent::ActiveCleared));
        }
        self.publish(AppEvent::Store(StoreEvent::RecordDeleted {
            magnification: magnification.to_string(),
        }));
        Ok(())
    }

    /// Make a stored record the active calibration.
    pub fn set_active_from(&mut self, magnification: &str) -> CalibDbResult<()> {
        let record = self
            .records
            .get(magnification)
            .cloned()
            .ok_or_else(|| CalibrationError::NotFound(magnification.to_string()))?;
        self.set_active(record)
    }

    /// Make a record the active calibration. The record need not match the
    /// currently selected magnification. Publishes a change event only when
    /// the active record actually changed.
    pub fn set_active(&mut self, record: CalibrationRecord) -> CalibDbResult<()> {
        record.validate()?;
        if self.active.as_ref() == Some(&record) {
            return Ok(());
        }
        let event = CalibrationEvent::ActiveChanged {
            magnification: record.magnification.clone(),
            unit: record.unit,
            pixels_per_unit: record.pixels_per_unit,
        };
        tracing::info!(
            magnification = %record.magnification,
            pixels_per_unit = record.pixels_per_unit,
            "active calibration changed"
        );
        self.active = Some(record);
        self.publish(AppEvent::Calibration(event));
        Ok(())
    }

    /// Drop the active calibration; measurements fall back to pixels.
    pub fn clear_active(&mut self) {
        if self.active.take().is_some() {
            self.publish(AppEvent::Calibration(CalibrationEvent::ActiveCleared));
        }
    }

    pub fn active(&self) -> Option<&CalibrationRecord> {
        self.active.as_ref()
    }

    /// The mapper-facing view of the active calibration.
    pub fn active_scale(&self) -> Option<ActiveCalibration> {
        self.active.as_ref().and_then(|r| r.scale().ok())
    }

    fn publish(&self, event: AppEvent) {
        if let Some(bus) = &self.bus {
            // NoSubscribers is normal when nothing listens yet.
            if let Err(err) = bus.publish(event) {
                tracing::debug!(%err, "calibration event not delivered");
            }
        }
    }
}

impl std::fmt::Debug for CalibrationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalibrationManager")
            .field("records", &self.records.len())
            .field("active", &self.active.as_ref().map(|a| &a.magnification))
            .finish()
    }
}
