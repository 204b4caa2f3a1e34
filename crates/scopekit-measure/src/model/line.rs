use serde::{Deserialize, Serialize};

use super::{point_segment_distance, Point};

/// A measured segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length in original-image pixels.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn boundary_distance(&self, p: &Point) -> f64 {
        point_segment_distance(p, &self.start, &self.end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.length() == 0.0
    }
}
