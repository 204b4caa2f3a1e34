//! Measurement labels for committed shapes.
//!
//! Pure geometry comes out of the shape model in pixels; this module pipes
//! it through the mapper and formats the result for display. When no
//! calibration is active the values stay in pixels and are labelled as such,
//! never silently passed off as physical units.

use scopekit_core::{format_value, ActiveCalibration};

use crate::mapper::{to_physical, to_physical_area};
use crate::model::{Shape, ShapeKind};

/// One named value of a shape's measurement, e.g. `width = 3.2 µm`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredComponent {
    pub name: &'static str,
    pub value: f64,
    /// "µm", "µm²", "px", "px²", ...
    pub unit_label: String,
}

impl MeasuredComponent {
    fn fmt(&self) -> String {
        format!("{} {} {}", self.name, format_value(self.value), self.unit_label)
    }
}

/// A shape's measurement, ready for the label renderer and the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub kind: ShapeKind,
    pub components: Vec<MeasuredComponent>,
    /// False when no calibration was active and values are raw pixels.
    pub calibrated: bool,
}

impl Measurement {
    /// Single-line summary, e.g. `"width 3.000 µm, height 2.000 µm, area 6.000 µm²"`.
    pub fn text(&self) -> String {
        self.components
            .iter()
            .map(MeasuredComponent::fmt)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Measure a shape against the active calibration.
pub fn measure(shape: &Shape, calibration: Option<&ActiveCalibration>) -> Measurement {
    let length_label = match calibration {
        Some(cal) => cal.unit().label().to_string(),
        None => "px".to_string(),
    };
    let area_label = match calibration {
        Some(cal) => cal.unit().area_label().to_string(),
        None => "px²".to_string(),
    };

    let length = |name: &'static str, pixels: f64| MeasuredComponent {
        name,
        value: to_physical(pixels, calibration),
        unit_label: length_label.clone(),
    };
    let area = |name: &'static str, pixels: f64| MeasuredComponent {
        name,
        value: to_physical_area(pixels, calibration),
        unit_label: area_label.clone(),
    };

    let components = match shape {
        Shape::Point(_) => Vec::new(),
        Shape::Line(s) => vec![length("length", s.length())],
        Shape::Rectangle(s) => vec![
            length("width", s.width()),
            length("height", s.height()),
            area("area", s.area()),
        ],
        Shape::Circle(s) => vec![length("radius", s.radius), area("area", s.area())],
        Shape::Arc(s) => vec![length("arc length", s.arc_length())],
        Shape::Curve(s) => vec![length("length", s.length())],
        Shape::ClosedCurve(s) => vec![length("perimeter", s.perimeter()), area("area", s.area())],
    };

    Measurement {
        kind: shape.kind(),
        components,
        calibrated: calibration.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClosedCurve, Line, Point, Rectangle};
    use scopekit_core::Unit;

    #[test]
    fn test_line_measurement_divides_by_factor() {
        let cal = ActiveCalibration::new(2.0, Unit::Microns).unwrap();
        let line = Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(200.0, 0.0)));
        let m = measure(&line, Some(&cal));
        assert!(m.calibrated);
        assert_eq!(m.components[0].value, 100.0);
        assert_eq!(m.text(), "length 100.000 µm");
    }

    #[test]
    fn test_uncalibrated_labels_pixels() {
        let line = Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(50.0, 0.0)));
        let m = measure(&line, None);
        assert!(!m.calibrated);
        assert_eq!(m.text(), "length 50.000 px");
    }

    #[test]
    fn test_rectangle_components() {
        let cal = ActiveCalibration::new(1.0, Unit::Millimeters).unwrap();
        let rect = Shape::Rectangle(Rectangle::new(Point::new(0.0, 0.0), Point::new(3.0, 2.0)));
        let m = measure(&rect, Some(&cal));
        assert_eq!(
            m.text(),
            "width 3.000 mm, height 2.000 mm, area 6.000 mm²"
        );
    }

    #[test]
    fn test_unit_square_area_with_unit_factor() {
        let cal = ActiveCalibration::new(1.0, Unit::Microns).unwrap();
        let ring = Shape::ClosedCurve(ClosedCurve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]));
        let m = measure(&ring, Some(&cal));
        let area = m.components.iter().find(|c| c.name == "area").unwrap();
        assert_eq!(area.value, 1.0);
        assert_eq!(area.unit_label, "µm²");
    }

    #[test]
    fn test_point_has_no_components() {
        use crate::model::PointMarker;
        let m = measure(
            &Shape::Point(PointMarker::new(Point::new(1.0, 1.0))),
            None,
        );
        assert!(m.components.is_empty());
        assert_eq!(m.text(), "");
    }
}
