//! Geometric hit-testing for the eraser.
//!
//! A shape is hit when its boundary (stroke) lies within the eraser radius
//! of the probe point. Interiors never count: touching the empty middle of a
//! rectangle or circle erases nothing.

use crate::collection::ShapeCollection;
use crate::model::Point;

/// Ids of all shapes whose boundary lies within `radius` of `point`.
///
/// The comparison is inclusive, so a probe exactly on a boundary hits it.
pub fn shapes_within(point: &Point, radius: f64, shapes: &ShapeCollection) -> Vec<u64> {
    shapes
        .iter()
        .filter(|s| s.shape.boundary_distance(point) <= radius)
        .map(|s| s.id)
        .collect()
}

/// Movement throttle for eraser drags.
///
/// Hit-testing every raw move event costs a full pass over the collection;
/// the sweep only re-tests once the cursor has travelled `min_step` pixels
/// from the last tested position. Pointer-down always tests (the sweep is
/// created at the first probe).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserSweep {
    last_tested: Point,
    min_step: f64,
}

impl EraserSweep {
    /// Start a sweep at the initial probe point.
    pub fn new(start: Point, min_step: f64) -> Self {
        Self {
            last_tested: start,
            min_step,
        }
    }

    /// Whether the cursor has moved far enough to warrant another pass.
    /// Advances the reference point when it has.
    pub fn should_test(&mut self, point: Point) -> bool {
        if point.distance_to(&self.last_tested) >= self.min_step {
            self.last_tested = point;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Circle, Line, Rectangle, Shape};

    fn sample_collection() -> ShapeCollection {
        let mut shapes = ShapeCollection::new();
        shapes.insert(Shape::Line(Line::new(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        )));
        shapes.insert(Shape::Circle(Circle::new(Point::new(200.0, 200.0), 50.0)));
        shapes.insert(Shape::Rectangle(Rectangle::new(
            Point::new(300.0, 300.0),
            Point::new(400.0, 350.0),
        )));
        shapes
    }

    #[test]
    fn test_no_false_positives_far_away() {
        let shapes = sample_collection();
        let hits = shapes_within(&Point::new(1000.0, 1000.0), 10.0, &shapes);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_hit_exactly_on_boundary() {
        let shapes = sample_collection();
        // Radius zero, probe exactly on the line
        let hits = shapes_within(&Point::new(50.0, 0.0), 0.0, &shapes);
        assert_eq!(hits.len(), 1);
        // Exactly on the circle's circumference
        let hits = shapes_within(&Point::new(250.0, 200.0), 0.0, &shapes);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_interior_does_not_hit() {
        let shapes = sample_collection();
        // Center of the circle, radius well below the 50 px annulus gap
        let hits = shapes_within(&Point::new(200.0, 200.0), 10.0, &shapes);
        assert!(hits.is_empty());
        // Middle of the rectangle
        let hits = shapes_within(&Point::new(350.0, 325.0), 10.0, &shapes);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_multiple_hits_in_one_probe() {
        let mut shapes = ShapeCollection::new();
        shapes.insert(Shape::Line(Line::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        )));
        shapes.insert(Shape::Line(Line::new(
            Point::new(0.0, 2.0),
            Point::new(10.0, 2.0),
        )));
        let hits = shapes_within(&Point::new(5.0, 1.0), 1.5, &shapes);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_sweep_throttles_small_moves() {
        let mut sweep = EraserSweep::new(Point::new(0.0, 0.0), 4.0);
        assert!(!sweep.should_test(Point::new(1.0, 0.0)));
        assert!(!sweep.should_test(Point::new(3.9, 0.0)));
        assert!(sweep.should_test(Point::new(4.0, 0.0)));
        // Reference advanced: the next threshold is relative to (4, 0)
        assert!(!sweep.should_test(Point::new(6.0, 0.0)));
        assert!(sweep.should_test(Point::new(8.0, 0.0)));
    }
}
