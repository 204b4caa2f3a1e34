//! # ScopeKit Measure
//!
//! The interactive measurement engine: shape model and measurement
//! formulas, the per-tool drawing session, eraser hit-testing, and the
//! mappings between display pixels, original-image pixels, and physical
//! units.
//!
//! ## Architecture
//!
//! ```text
//! pointer events (original-image pixel space)
//!   └── DrawingSession (per-tool state machine)
//!         ├── ShapeCollection (committed, insertion order = render order)
//!         └── hit_test (eraser only)
//!
//! Viewport: display space ↔ original-image space (rendering/input edge)
//! mapper + measurement: original-image pixels → physical units
//! ```
//!
//! Geometry is stored exclusively in original-image pixel space. The
//! display-scale correction lives in [`viewport`] and the calibration factor
//! in [`mapper`]; neither is ever baked into stored coordinates.

pub mod collection;
pub mod hit_test;
pub mod mapper;
pub mod measurement;
pub mod model;
pub mod session;
pub mod viewport;

pub use collection::{CommittedShape, ShapeCollection};
pub use hit_test::{shapes_within, EraserSweep};
pub use measurement::{measure, MeasuredComponent, Measurement};
pub use model::{
    Arc, Circle, ClosedCurve, Curve, Line, Point, PointMarker, Rectangle, Shape, ShapeKind,
};
pub use session::{DrawingSession, SessionState, SessionUpdate, Tool};
pub use viewport::{Viewport, ViewportError};
