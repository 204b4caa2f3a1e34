use serde::{Deserialize, Serialize};

use super::Point;

/// A single marked position. Carries no measurement of its own; it exists
/// so operators can pin features of interest for the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub position: Point,
}

impl PointMarker {
    pub fn new(position: Point) -> Self {
        Self { position }
    }

    pub fn boundary_distance(&self, p: &Point) -> f64 {
        p.distance_to(&self.position)
    }
}
