//! # Event Bus Module
//!
//! Publish/subscribe channel for calibration state changes, decoupling the
//! calibration manager from its consumers (live measurement views, stored
//! record lists).
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and an async broadcast receiver
//! - A publish issued from inside a handler of the same category is rejected,
//!   so a consumer that writes calibration state back cannot start a
//!   republish loop
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scopekit_core::event_bus::{AppEvent, CalibrationEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Calibration]),
//!     |event| {
//!         if let AppEvent::Calibration(cal) = event {
//!             println!("Calibration event: {:?}", cal);
//!         }
//!     },
//! );
//!
//! bus.publish(AppEvent::Calibration(CalibrationEvent::ActiveCleared));
//! bus.unsubscribe(subscription);
//! ```
//!
//! The bus is constructed by the owning application and injected into the
//! components that publish or subscribe; there is no global instance.

mod bus;
mod events;

pub use bus::*;
pub use events::*;
