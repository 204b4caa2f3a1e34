//! Interactive drawing session.
//!
//! Translates pointer events into shape commits, one state machine per
//! session. Every tool is a variant of the closed [`Tool`] enum, so adding a
//! tool extends the `match` arms here at compile time rather than a
//! string-keyed handler table at runtime.
//!
//! All pointer coordinates arriving here are already in original-image pixel
//! space; the rendering layer converts device coordinates before handing
//! events over (see [`crate::viewport`]).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use scopekit_core::constants::{
    DEFAULT_ERASER_RADIUS, MIN_CLOSED_CURVE_POINTS, MIN_CURVE_POINTS,
};

use crate::collection::ShapeCollection;
use crate::hit_test::{shapes_within, EraserSweep};
use crate::model::{Arc, Circle, ClosedCurve, Curve, Line, Point, PointMarker, Rectangle, Shape};

/// The active annotation tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    /// Selection/no-op tool; draws nothing.
    Pointer,
    Point,
    Line,
    Rectangle,
    Circle,
    Arc,
    Curve,
    ClosedCurve,
    Eraser,
}

impl Default for Tool {
    fn default() -> Self {
        Self::Pointer
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tool::Pointer => "pointer",
            Tool::Point => "point",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Arc => "arc",
            Tool::Curve => "curve",
            Tool::ClosedCurve => "closedCurve",
            Tool::Eraser => "eraser",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pointer" | "select" => Ok(Tool::Pointer),
            "point" => Ok(Tool::Point),
            "line" => Ok(Tool::Line),
            "rectangle" => Ok(Tool::Rectangle),
            "circle" => Ok(Tool::Circle),
            "arc" => Ok(Tool::Arc),
            "curve" => Ok(Tool::Curve),
            "closedcurve" => Ok(Tool::ClosedCurve),
            "eraser" => Ok(Tool::Eraser),
            _ => Err(format!("Unknown tool: {}", s)),
        }
    }
}

/// Where the session is within the current gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No gesture in progress.
    Idle,
    /// One point captured; line/rectangle/circle/arc drag in progress.
    Anchored { anchor: Point },
    /// Curve/closed-curve points accumulating until a double-click.
    Collecting { points: Vec<Point> },
    /// Eraser held down, sweeping.
    Erasing { sweep: EraserSweep },
}

/// What a pointer event changed, for the owning loop to render after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionUpdate {
    /// Id of a shape committed by this event, if any.
    pub committed: Option<u64>,
    /// Ids removed by the eraser during this event.
    pub erased: Vec<u64>,
}

impl SessionUpdate {
    pub fn is_empty(&self) -> bool {
        self.committed.is_none() && self.erased.is_empty()
    }

    fn committed(id: Option<u64>) -> Self {
        Self {
            committed: id,
            erased: Vec::new(),
        }
    }

    fn erased(ids: Vec<u64>) -> Self {
        Self {
            committed: None,
            erased: ids,
        }
    }
}

/// Per-image interactive drawing session.
///
/// Owns the committed shape collection and the in-progress gesture state.
/// All transitions run synchronously inside one pointer-event handler
/// invocation; the owning loop renders after each call that returns a
/// non-empty update (or whenever the preview may have moved).
#[derive(Debug, Clone)]
pub struct DrawingSession {
    shapes: ShapeCollection,
    tool: Tool,
    state: SessionState,
    cursor: Option<Point>,
    eraser_radius: f64,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self {
            shapes: ShapeCollection::new(),
            tool: Tool::default(),
            state: SessionState::Idle,
            cursor: None,
            eraser_radius: DEFAULT_ERASER_RADIUS,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. Always discards any in-progress gesture, whatever state
    /// it was in, and returns to idle.
    pub fn set_tool(&mut self, tool: Tool) {
        if !matches!(self.state, SessionState::Idle) {
            tracing::debug!(from = %self.tool, to = %tool, "tool switch discards in-progress gesture");
        }
        self.state = SessionState::Idle;
        self.tool = tool;
    }

    /// Cancel the in-progress gesture without changing tools (ESC).
    pub fn cancel(&mut self) {
        self.state = SessionState::Idle;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn shapes(&self) -> &ShapeCollection {
        &self.shapes
    }

    pub fn eraser_radius(&self) -> f64 {
        self.eraser_radius
    }

    pub fn set_eraser_radius(&mut self, radius: f64) {
        if radius > 0.0 {
            self.eraser_radius = radius;
        }
    }

    /// Remove every committed shape (the toolbar's clear-all).
    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
    }

    /// The session's image changed: drop all shapes and any gesture.
    pub fn reset_for_new_image(&mut self) {
        self.shapes.clear();
        self.state = SessionState::Idle;
        self.cursor = None;
    }

    pub fn pointer_down(&mut self, p: Point) -> SessionUpdate {
        self.cursor = Some(p);
        match self.tool {
            Tool::Pointer => SessionUpdate::default(),
            Tool::Point => {
                let id = self.commit(Shape::Point(PointMarker::new(p)));
                SessionUpdate::committed(id)
            }
            Tool::Line | Tool::Rectangle | Tool::Circle | Tool::Arc => {
                self.state = SessionState::Anchored { anchor: p };
                SessionUpdate::default()
            }
            Tool::Curve | Tool::ClosedCurve => {
                match &mut self.state {
                    SessionState::Collecting { points } => points.push(p),
                    _ => self.state = SessionState::Collecting { points: vec![p] },
                }
                SessionUpdate::default()
            }
            Tool::Eraser => {
                let erased = self.erase_at(&p);
                self.state = SessionState::Erasing {
                    sweep: EraserSweep::new(p, self.eraser_radius / 2.0),
                };
                SessionUpdate::erased(erased)
            }
        }
    }

    pub fn pointer_move(&mut self, p: Point) -> SessionUpdate {
        self.cursor = Some(p);
        if let SessionState::Erasing { sweep } = &mut self.state {
            if sweep.should_test(p) {
                return SessionUpdate::erased(self.erase_at(&p));
            }
        }
        SessionUpdate::default()
    }

    pub fn pointer_up(&mut self, p: Point) -> SessionUpdate {
        self.cursor = Some(p);
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Anchored { anchor } => {
                let shape = build_anchored_shape(self.tool, &anchor, &p);
                let id = shape.and_then(|s| self.commit(s));
                SessionUpdate::committed(id)
            }
            SessionState::Erasing { .. } => SessionUpdate::default(),
            // Curve collection survives pointer-up; put it back.
            state @ SessionState::Collecting { .. } => {
                self.state = state;
                SessionUpdate::default()
            }
            SessionState::Idle => SessionUpdate::default(),
        }
    }

    pub fn double_click(&mut self, p: Point) -> SessionUpdate {
        self.cursor = Some(p);
        let SessionState::Collecting { points } =
            std::mem::replace(&mut self.state, SessionState::Idle)
        else {
            return SessionUpdate::default();
        };

        let shape = match self.tool {
            Tool::Curve if points.len() >= MIN_CURVE_POINTS => Some(Shape::Curve(Curve::new(points))),
            Tool::ClosedCurve if points.len() >= MIN_CLOSED_CURVE_POINTS => {
                // Close the ring back to the first point.
                let mut ring = points;
                ring.push(ring[0]);
                Some(Shape::ClosedCurve(ClosedCurve::new(ring)))
            }
            _ => {
                tracing::debug!(
                    tool = %self.tool,
                    count = points.len(),
                    "curve commit below minimum point count discarded"
                );
                None
            }
        };
        let id = shape.and_then(|s| self.commit(s));
        SessionUpdate::committed(id)
    }

    /// The tentative shape for visual feedback, never committed.
    ///
    /// While anchored this is the shape the current drag would commit; while
    /// collecting it is the polyline with the live cursor appended as a
    /// tentative final point.
    pub fn preview(&self) -> Option<Shape> {
        let cursor = self.cursor?;
        match &self.state {
            SessionState::Anchored { anchor } => build_anchored_shape(self.tool, anchor, &cursor),
            SessionState::Collecting { points } => {
                let mut tentative = points.clone();
                tentative.push(cursor);
                match self.tool {
                    Tool::ClosedCurve => Some(Shape::ClosedCurve(ClosedCurve::new(tentative))),
                    _ => Some(Shape::Curve(Curve::new(tentative))),
                }
            }
            SessionState::Idle | SessionState::Erasing { .. } => None,
        }
    }

    /// Commit a built shape, unless it is degenerate.
    fn commit(&mut self, shape: Shape) -> Option<u64> {
        if shape.is_degenerate() {
            tracing::debug!(kind = %shape.kind(), "degenerate commit discarded");
            return None;
        }
        let kind = shape.kind();
        let id = self.shapes.insert(shape);
        tracing::debug!(id, %kind, "shape committed");
        Some(id)
    }

    fn erase_at(&mut self, p: &Point) -> Vec<u64> {
        let hits = shapes_within(p, self.eraser_radius, &self.shapes);
        if !hits.is_empty() {
            self.shapes.remove_ids(&hits);
            tracing::debug!(count = hits.len(), "shapes erased");
        }
        hits
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape the anchored tools would commit for an anchor/release pair.
///
/// Arcs are always swept from angle 0 to the direction of anchor→release;
/// this tool is a quick protractor, not a general arc editor.
fn build_anchored_shape(tool: Tool, anchor: &Point, p: &Point) -> Option<Shape> {
    match tool {
        Tool::Line => Some(Shape::Line(Line::new(*anchor, *p))),
        Tool::Rectangle => Some(Shape::Rectangle(Rectangle::new(*anchor, *p))),
        Tool::Circle => Some(Shape::Circle(Circle::from_boundary_point(*anchor, *p))),
        Tool::Arc => {
            let radius = anchor.distance_to(p);
            let end_angle = (p.y - anchor.y).atan2(p.x - anchor.x);
            Some(Shape::Arc(Arc::new(*anchor, radius, 0.0, end_angle)))
        }
        _ => None,
    }
}
