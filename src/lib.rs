//! # ScopeKit
//!
//! A measurement and calibration engine for microscope imagery. Operators
//! draw geometric annotations (lines, rectangles, circles, arcs, curves)
//! over a captured frame and read back physical lengths and areas derived
//! from a per-magnification calibration factor.
//!
//! ## Architecture
//!
//! ScopeKit is organized as a workspace:
//!
//! 1. **scopekit-core** - Units, error taxonomy, event bus, constants
//! 2. **scopekit-measure** - Shape model, drawing session, hit-testing,
//!    display/physical coordinate mapping
//! 3. **scopekit-calibdb** - Calibration records, persistence backends,
//!    active-calibration manager, reference-line workflow
//! 4. **scopekit** - This facade, re-exporting the engine for integrators
//!
//! The application shell (windows, menus, live video, on-canvas rendering,
//! report export) is deliberately outside this workspace: the engine
//! consumes pointer events in original-image pixel space and produces an
//! ordered shape collection plus measurement labels, nothing more.
//!
//! ## Coordinate convention
//!
//! Geometry is stored exclusively in original-image pixel space. Display
//! scaling is applied once at the rendering/input edge
//! ([`scopekit_measure::Viewport`]); the calibration factor is applied once
//! when a label is produced ([`scopekit_measure::mapper`]). Neither is ever
//! baked into stored coordinates.

#![allow(dead_code)]

pub use scopekit_calibdb as calibdb;
pub use scopekit_core as core;
pub use scopekit_measure as measure;

pub use scopekit_core::{
    ActiveCalibration, AppEvent, CalibrationError, CalibrationEvent, Error, EventBus,
    EventCategory, EventFilter, Result, StoreEvent, Unit,
};

pub use scopekit_measure::{
    measure as measure_shape, DrawingSession, Measurement, Point, SessionState, SessionUpdate,
    Shape, ShapeCollection, ShapeKind, Tool, Viewport,
};

pub use scopekit_calibdb::{
    CalibrationManager, CalibrationRecord, CalibrationStore, CalibrationWorkflow, JsonFileStore,
    MemoryStore, WorkflowState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
