use serde::{Deserialize, Serialize};

use super::Point;

/// A circle defined by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle through `boundary`, centered at `center`.
    pub fn from_boundary_point(center: Point, boundary: Point) -> Self {
        Self::new(center, center.distance_to(&boundary))
    }

    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// Annulus distance: how far `p` is from the circumference. The disk
    /// interior does not count as boundary.
    pub fn boundary_distance(&self, p: &Point) -> f64 {
        (p.distance_to(&self.center) - self.radius).abs()
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annulus_distance() {
        let circle = Circle::new(Point::new(0.0, 0.0), 10.0);
        // Center is radius away from the circumference
        assert_eq!(circle.boundary_distance(&Point::new(0.0, 0.0)), 10.0);
        // On the circumference
        assert_eq!(circle.boundary_distance(&Point::new(10.0, 0.0)), 0.0);
        // Outside
        assert_eq!(circle.boundary_distance(&Point::new(13.0, 0.0)), 3.0);
    }

    #[test]
    fn test_from_boundary_point() {
        let circle = Circle::from_boundary_point(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(circle.radius, 5.0);
    }
}
