use serde::{Deserialize, Serialize};

use super::{point_segment_distance, Point};

/// A closed polyline ring. The ring wraps from the last point back to the
/// first; formulas index modulo the point count, so an explicitly repeated
/// first point only adds a zero-length segment and changes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedCurve {
    pub points: Vec<Point>,
}

impl ClosedCurve {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Enclosed area by the shoelace formula, absolute value.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum.abs() / 2.0
    }

    /// Ring perimeter including the closing segment.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.points[i].distance_to(&self.points[(i + 1) % n]))
            .sum()
    }

    /// Minimum distance over the ring's segments, closing segment included.
    pub fn boundary_distance(&self, p: &Point) -> f64 {
        let n = self.points.len();
        match n {
            0 => f64::INFINITY,
            1 => p.distance_to(&self.points[0]),
            _ => (0..n)
                .map(|i| point_segment_distance(p, &self.points[i], &self.points[(i + 1) % n]))
                .fold(f64::INFINITY, f64::min),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> ClosedCurve {
        ClosedCurve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_shoelace_unit_square() {
        assert_eq!(unit_square().area(), 1.0);
    }

    #[test]
    fn test_repeated_first_point_changes_nothing() {
        let mut points = unit_square().points;
        points.push(points[0]);
        let explicit = ClosedCurve::new(points);
        assert_eq!(explicit.area(), 1.0);
        assert_eq!(explicit.perimeter(), 4.0);
    }

    #[test]
    fn test_perimeter_includes_closing_segment() {
        assert_eq!(unit_square().perimeter(), 4.0);
    }

    #[test]
    fn test_winding_direction_irrelevant() {
        let cw = ClosedCurve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ]);
        assert_eq!(cw.area(), 1.0);
    }

    #[test]
    fn test_boundary_includes_closing_segment() {
        let ring = unit_square();
        // Probe near the closing edge from (0,1) back to (0,0)
        assert!((ring.boundary_distance(&Point::new(-0.5, 0.5)) - 0.5).abs() < 1e-12);
    }
}
