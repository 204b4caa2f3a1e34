use serde::{Deserialize, Serialize};

use super::Point;

const TAU: f64 = std::f64::consts::TAU;
const PI: f64 = std::f64::consts::PI;

/// Normalize an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Wrap an angle difference into `(-π, π]`.
///
/// This makes the sweep between two angles independent of how they were
/// encoded: `3π/2` and `-π/2` name the same direction and produce the same
/// wrapped difference against any start angle.
fn wrap_to_pi(angle: f64) -> f64 {
    let r = angle.rem_euclid(TAU);
    if r > PI {
        r - TAU
    } else {
        r
    }
}

/// A circular arc: center, radius, and a swept angular interval.
///
/// Angles are stored normalized into `[0, 2π)`. The sweep is the wrapped
/// difference from start to end, so it never exceeds a half turn in either
/// direction; a negative wrapped difference means the arc runs clockwise
/// from the start angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle: normalize_angle(start_angle),
            end_angle: normalize_angle(end_angle),
        }
    }

    /// Signed sweep from start to end, wrapped into `(-π, π]`.
    pub fn sweep(&self) -> f64 {
        wrap_to_pi(self.end_angle - self.start_angle)
    }

    /// Arc length: radius times the absolute sweep.
    pub fn arc_length(&self) -> f64 {
        self.radius * self.sweep().abs()
    }

    /// Whether the direction `angle` (relative to the center) falls within
    /// the swept interval.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let sweep = self.sweep();
        let d = wrap_to_pi(angle - self.start_angle);
        if sweep >= 0.0 {
            (0.0..=sweep).contains(&d)
        } else {
            (sweep..=0.0).contains(&d)
        }
    }

    /// Annulus distance restricted to the swept interval. A probe at the
    /// right radius but outside the sweep does not touch the arc; its
    /// distance is measured to the nearer arc endpoint instead.
    pub fn boundary_distance(&self, p: &Point) -> f64 {
        let to_center = p.distance_to(&self.center);
        let angle = normalize_angle((p.y - self.center.y).atan2(p.x - self.center.x));
        if self.contains_angle(angle) {
            return (to_center - self.radius).abs();
        }
        let start = self.point_at(self.start_angle);
        let end = self.point_at(self.end_angle);
        p.distance_to(&start).min(p.distance_to(&end))
    }

    fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0 || self.sweep() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_sweep_sign_convention_independent() {
        let center = Point::new(0.0, 0.0);
        // end = 3π/2 and end = -π/2 name the same arc
        let a = Arc::new(center, 10.0, 0.0, 3.0 * PI / 2.0);
        let b = Arc::new(center, 10.0, 0.0, -PI / 2.0);
        assert!((a.arc_length() - 10.0 * PI / 2.0).abs() < EPS);
        assert!((a.arc_length() - b.arc_length()).abs() < EPS);
    }

    #[test]
    fn test_quarter_turn_length() {
        let arc = Arc::new(Point::new(0.0, 0.0), 4.0, 0.0, PI / 2.0);
        assert!((arc.arc_length() - 4.0 * PI / 2.0).abs() < EPS);
    }

    #[test]
    fn test_contains_angle() {
        // CCW quarter arc from 0 to π/2
        let arc = Arc::new(Point::new(0.0, 0.0), 1.0, 0.0, PI / 2.0);
        assert!(arc.contains_angle(PI / 4.0));
        assert!(arc.contains_angle(0.0));
        assert!(arc.contains_angle(PI / 2.0));
        assert!(!arc.contains_angle(PI));
        assert!(!arc.contains_angle(3.0 * PI / 2.0));

        // CW quarter arc from 0 down to -π/2 (stored as 3π/2)
        let arc = Arc::new(Point::new(0.0, 0.0), 1.0, 0.0, -PI / 2.0);
        assert!(arc.contains_angle(7.0 * PI / 4.0));
        assert!(!arc.contains_angle(PI / 4.0));
    }

    #[test]
    fn test_boundary_distance_outside_sweep() {
        // Quarter arc in the first quadrant, radius 10
        let arc = Arc::new(Point::new(0.0, 0.0), 10.0, 0.0, PI / 2.0);
        // On the arc
        let on = Point::new(10.0 * (PI / 4.0).cos(), 10.0 * (PI / 4.0).sin());
        assert!(arc.boundary_distance(&on) < EPS);
        // Right radius, opposite quadrant: nearest is an endpoint, not the annulus
        let opposite = Point::new(-10.0, 0.0);
        assert!(arc.boundary_distance(&opposite) > 10.0);
    }

    #[test]
    fn test_degenerate() {
        assert!(Arc::new(Point::new(0.0, 0.0), 0.0, 0.0, PI).is_degenerate());
        assert!(Arc::new(Point::new(0.0, 0.0), 5.0, 1.0, 1.0).is_degenerate());
        assert!(!Arc::new(Point::new(0.0, 0.0), 5.0, 0.0, 1.0).is_degenerate());
    }
}
